//! Social platform profile extraction from free text.

use regex::Regex;

use lva_core::{SocialLinks, SocialPlatform};

/// Extract social profile URLs per platform, deduplicated within the call.
///
/// Twitter matches both `twitter.com` and `x.com` hosts. Matched URLs are
/// normalized to carry an `https` scheme.
#[must_use]
pub fn extract_social(text: &str) -> SocialLinks {
    let mut links = SocialLinks::new();

    for (platform, pattern) in platform_patterns() {
        let re = Regex::new(pattern).expect("valid regex");
        for m in re.find_iter(text) {
            let url = with_scheme(m.as_str());
            let urls = links.entry(platform).or_default();
            if !urls.contains(&url) {
                urls.push(url);
            }
        }
    }

    links
}

fn platform_patterns() -> [(SocialPlatform, &'static str); 4] {
    [
        (
            SocialPlatform::Facebook,
            r"(?i)(?:https?://)?(?:www\.)?facebook\.com/[A-Za-z0-9.\-_]+",
        ),
        (
            SocialPlatform::Instagram,
            r"(?i)(?:https?://)?(?:www\.)?instagram\.com/[A-Za-z0-9.\-_]+",
        ),
        (
            SocialPlatform::Linkedin,
            r"(?i)(?:https?://)?(?:www\.)?linkedin\.com/[A-Za-z0-9.\-_/]+",
        ),
        (
            SocialPlatform::Twitter,
            r"(?i)(?:https?://)?(?:www\.)?(?:twitter|x)\.com/[A-Za-z0-9.\-_]+",
        ),
    ]
}

fn with_scheme(url: &str) -> String {
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}
