fn main() {
    plugdex::run_cli();
}
