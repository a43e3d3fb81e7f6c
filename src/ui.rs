/// Progress lines go to stderr; stdout is reserved for command results.
pub(crate) fn progress(message: &str) {
    eprintln!("{message}");
}
