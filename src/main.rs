fn main() {
    stanza::cli::run();
}
