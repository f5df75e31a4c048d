fn main() {
    mergespec::cli::run();
}
