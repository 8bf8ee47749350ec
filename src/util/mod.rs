pub mod format;

pub fn trim_newline(mut string: String) -> String {
    // Token files are usually written by an editor or `echo`, so deal with both line ending styles
    if string.ends_with('\n') {
        string.pop();
        if string.ends_with('\r') {
            string.pop();
        }
    }
    string
}
