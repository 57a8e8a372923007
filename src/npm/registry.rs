//! Registry URL resolution
//!
//! Asks the package manager for its configured registry endpoint and falls
//! back to the public default on any failure. Advisory data: this never
//! fails, it only degrades.

use crate::constants::NPMJS_REGISTRY;
use crate::error::Result;
use crate::npm::runner::CommandRunner;
use crate::ui as output;

/// Resolve the registry URL via `<tool> config get registry`.
///
/// Returns [`NPMJS_REGISTRY`] when the tool is missing, cannot be spawned,
/// exits non-zero, or writes to stderr. Failures are logged at debug only.
pub fn resolve_registry(runner: &dyn CommandRunner, tool: &str) -> String {
    match query_registry(runner, tool) {
        Ok(url) => url,
        Err(e) => {
            output::debug(&format!("registry lookup failed, using default: {}", e));
            NPMJS_REGISTRY.to_string()
        }
    }
}

fn query_registry(runner: &dyn CommandRunner, tool: &str) -> Result<String> {
    let out = runner.run(tool, &["config", "get", "registry"])?;
    let stdout = out.ensure_clean(&format!("{} config get registry", tool))?;
    // npm terminates the value with a newline
    Ok(stdout.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlugdexError;
    use crate::npm::runner::CommandOutput;

    struct FixedRunner(Result<CommandOutput>);

    impl CommandRunner for FixedRunner {
        fn run(&self, _tool: &str, _args: &[&str]) -> Result<CommandOutput> {
            match &self.0 {
                Ok(out) => Ok(out.clone()),
                Err(_) => Err(PlugdexError::ExecutableNotFound {
                    tool: "npm".to_string(),
                }),
            }
        }
    }

    fn ok(stdout: &str, stderr: &str, exit_code: i32) -> FixedRunner {
        FixedRunner(Ok(CommandOutput {
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            exit_code,
        }))
    }

    #[test]
    fn clean_output_is_trimmed_and_returned() {
        let runner = ok("https://registry.corp.example/\n", "", 0);
        assert_eq!(
            resolve_registry(&runner, "npm"),
            "https://registry.corp.example/"
        );
    }

    #[test]
    fn missing_tool_falls_back_to_default() {
        let runner = FixedRunner(Err(PlugdexError::Other(String::new())));
        assert_eq!(resolve_registry(&runner, "npm"), NPMJS_REGISTRY);
    }

    #[test]
    fn stderr_noise_falls_back_to_default() {
        let runner = ok("https://registry.corp.example/\n", "npm WARN config", 0);
        assert_eq!(resolve_registry(&runner, "npm"), NPMJS_REGISTRY);
    }

    #[test]
    fn nonzero_exit_falls_back_to_default() {
        let runner = ok("", "", 2);
        assert_eq!(resolve_registry(&runner, "npm"), NPMJS_REGISTRY);
    }
}
