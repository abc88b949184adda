//! CLI command implementations.

pub mod add_page;
pub mod like;
pub mod replay;
pub mod suggest;

use rango_client::Fragment;

/// Print a fragment body to stdout exactly as received, newline-terminated.
pub(crate) fn print_fragment(fragment: &Fragment) {
    let body = fragment.as_str();
    if body.ends_with('\n') {
        print!("{body}");
    } else {
        println!("{body}");
    }
}
