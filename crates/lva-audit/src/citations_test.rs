use super::*;

fn search_links(entries: &[(SocialPlatform, &[&str])]) -> SocialLinks {
    entries
        .iter()
        .map(|(p, urls)| (*p, urls.iter().map(|u| (*u).to_string()).collect()))
        .collect()
}

fn website_links(entries: &[(SocialPlatform, &str)]) -> BTreeMap<SocialPlatform, String> {
    entries
        .iter()
        .map(|(p, url)| (*p, (*url).to_string()))
        .collect()
}

fn result(title: &str, url: &str, domain: &str) -> RawResult {
    RawResult {
        title: title.to_string(),
        snippet: String::new(),
        url: url.to_string(),
        domain: domain.to_string(),
    }
}

// ---------------------------------------------------------------------------
// merge_social
// ---------------------------------------------------------------------------

#[test]
fn merge_without_duplicates() {
    // Scenario: the website self-reports a facebook URL that search also
    // surfaced, plus search finds a distinct instagram URL. The merge must
    // contain exactly one facebook entry and one instagram entry.
    let search = search_links(&[
        (SocialPlatform::Facebook, &["https://fb.com/x"]),
        (SocialPlatform::Instagram, &["https://instagram.com/x"]),
    ]);
    let website = website_links(&[(SocialPlatform::Facebook, "https://fb.com/x")]);

    let merged = merge_social(&search, &website);
    assert_eq!(merged[&SocialPlatform::Facebook], vec!["https://fb.com/x"]);
    assert_eq!(
        merged[&SocialPlatform::Instagram],
        vec!["https://instagram.com/x"]
    );
    assert_eq!(social_score(&merged), 50);
}

#[test]
fn website_link_comes_first() {
    let search = search_links(&[(
        SocialPlatform::Facebook,
        &["https://facebook.com/acme-old"],
    )]);
    let website = website_links(&[(SocialPlatform::Facebook, "https://facebook.com/acme")]);

    let merged = merge_social(&search, &website);
    assert_eq!(
        merged[&SocialPlatform::Facebook],
        vec!["https://facebook.com/acme", "https://facebook.com/acme-old"]
    );
}

#[test]
fn merge_trims_before_comparing() {
    let search = search_links(&[(SocialPlatform::Facebook, &["https://fb.com/x"])]);
    let website = website_links(&[(SocialPlatform::Facebook, "  https://fb.com/x  ")]);
    let merged = merge_social(&search, &website);
    assert_eq!(merged[&SocialPlatform::Facebook].len(), 1);
}

#[test]
fn blank_website_link_is_ignored() {
    let website = website_links(&[(SocialPlatform::Facebook, "   ")]);
    let merged = merge_social(&SocialLinks::new(), &website);
    assert!(merged.is_empty());
}

// ---------------------------------------------------------------------------
// social_score
// ---------------------------------------------------------------------------

#[test]
fn social_score_counts_platforms_out_of_four() {
    assert_eq!(social_score(&SocialLinks::new()), 0);

    let one = search_links(&[(SocialPlatform::Facebook, &["https://fb.com/x"])]);
    assert_eq!(social_score(&one), 25);

    let all = search_links(&[
        (SocialPlatform::Facebook, &["a"]),
        (SocialPlatform::Instagram, &["b"]),
        (SocialPlatform::Linkedin, &["c"]),
        (SocialPlatform::Twitter, &["d"]),
    ]);
    assert_eq!(social_score(&all), 100);
}

// ---------------------------------------------------------------------------
// SocialSummary
// ---------------------------------------------------------------------------

#[test]
fn social_summary_reports_first_url_per_platform() {
    let search = search_links(&[
        (SocialPlatform::Facebook, &["https://fb.com/x"]),
        (SocialPlatform::Instagram, &["https://instagram.com/x"]),
    ]);
    let website = website_links(&[(SocialPlatform::Facebook, "https://fb.com/x")]);
    let merged = merge_social(&search, &website);

    let summary = SocialSummary::build(&merged, &search, &website);
    assert_eq!(summary.facebook.as_deref(), Some("https://fb.com/x"));
    assert_eq!(summary.instagram.as_deref(), Some("https://instagram.com/x"));
    assert!(summary.linkedin.is_none());
    assert_eq!(summary.social_score, 50);
    assert_eq!(summary.data_source.from_search, 2);
    assert_eq!(summary.data_source.from_website, 1);
    assert_eq!(summary.data_source.total_found, 2);
}

// ---------------------------------------------------------------------------
// industry_directories
// ---------------------------------------------------------------------------

#[test]
fn contractor_type_gets_home_services_directories() {
    let dirs = industry_directories("Roofing Contractor");
    assert!(dirs.contains(&"angi.com"));
    assert!(dirs.contains(&"houzz.com"));
}

#[test]
fn unmatched_type_gets_generic_directories() {
    assert_eq!(
        industry_directories("alpaca farm"),
        GENERIC_INDUSTRY_DIRECTORIES.to_vec()
    );
}

// ---------------------------------------------------------------------------
// analyze_directories
// ---------------------------------------------------------------------------

#[test]
fn coverage_splits_found_and_missing() {
    let results = vec![
        result("Acme on Yelp", "https://yelp.com/biz/acme", "yelp.com"),
        result("Acme on Angi", "https://angi.com/acme", "angi.com"),
    ];
    let analysis = analyze_directories(&results, "Roofing Contractor");

    assert_eq!(analysis.tier1_found, ["yelp.com"]);
    assert_eq!(
        analysis.tier1_missing,
        ["bbb.org", "yellowpages.com", "facebook.com"]
    );
    assert_eq!(analysis.industry_found, ["angi.com"]);
    assert_eq!(
        analysis.industry_missing,
        ["houzz.com", "homeadvisor.com", "thumbtack.com"]
    );
    // 2 of 8 checked directories.
    assert_eq!(analysis.citation_completion_rate, 25);
}

#[test]
fn completion_rate_zero_when_nothing_found() {
    let analysis = analyze_directories(&[], "Roofing Contractor");
    assert_eq!(analysis.citation_completion_rate, 0);
    assert!(analysis.tier1_found.is_empty());
}

#[test]
fn domain_falls_back_to_url_when_absent() {
    let results = vec![result("Acme on Yelp", "https://www.yelp.com/biz/acme", "")];
    let analysis = analyze_directories(&results, "plumbing");
    assert_eq!(analysis.tier1_found, ["yelp.com"]);
}

#[test]
fn facebook_results_are_directory_links_not_social_citations() {
    let results = vec![
        result("Acme - Facebook", "https://facebook.com/acme", "facebook.com"),
        result("Acme - Instagram", "https://instagram.com/acme", "instagram.com"),
    ];
    let analysis = analyze_directories(&results, "plumbing");
    assert_eq!(analysis.directory_links.len(), 1);
    assert_eq!(analysis.directory_links[0].domain, "facebook.com");
    assert_eq!(analysis.social_citations.len(), 1);
    assert_eq!(analysis.social_citations[0].domain, "instagram.com");
}

#[test]
fn non_directory_results_are_neither() {
    let results = vec![result("Acme site", "https://acmeroofing.com", "acmeroofing.com")];
    let analysis = analyze_directories(&results, "plumbing");
    assert!(analysis.directory_links.is_empty());
    assert!(analysis.social_citations.is_empty());
}
