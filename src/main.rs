/// Binary entrypoint for the `urlclean` executable.
///
/// Keeps the binary thin — all logic lives in the `urlclean_lib` crate so
/// unit tests can import library functions directly.
fn main() -> std::process::ExitCode {
    urlclean_lib::run()
}
