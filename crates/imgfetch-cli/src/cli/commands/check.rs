//! `imgfetch check <url>` – run the validator on a single candidate.

use imgfetch_core::validate::UrlValidator;

pub fn run_check(url: &str) {
    if UrlValidator::new().is_valid(url) {
        println!("accepted: {url}");
    } else {
        println!("rejected: {url}");
    }
}
