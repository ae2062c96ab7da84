use apsentry_common::config::TrailingBlock;
use apsentry_common::finding::{Category, Severity};
use apsentry_core::audit::audit_str;
use apsentry_core::classifier::classify;
use apsentry_core::parser::parse_str;
use apsentry_core::registry::Registry;

use super::fixtures::{SITE_REGISTRY, SITE_SCAN, block};

fn corp_registry() -> Registry {
    let (registry, stats) = Registry::load_str("[authorized]\naa:11=CorpNet\n");
    assert_eq!(stats.inserted, 1);
    registry
}

#[test]
fn authorized_ap_on_its_ssid_is_info() {
    let audit = audit_str(&corp_registry(), &block("aa:11", "CorpNet"), TrailingBlock::Emit);
    let report = audit.report;

    assert_eq!(report.info.len(), 1);
    assert_eq!(report.info[0].rule, 1);
    assert_eq!(report.info[0].category, Category::AuthorizedExpected);
    assert_eq!(report.authorized, 1);
    assert_eq!(report.total(), 1);
}

#[test]
fn rogue_ap_on_protected_ssid_is_high() {
    let audit = audit_str(&corp_registry(), &block("bb:22", "CorpNet"), TrailingBlock::Emit);
    let report = audit.report;

    assert_eq!(report.high.len(), 1);
    assert_eq!(report.high[0].rule, 7);
    assert!(report.high[0].title.contains("bb:22"));
    assert!(report.high[0].title.contains("CorpNet"));
    assert_eq!(report.new, 1);
    assert_eq!(report.total(), 1);
}

#[test]
fn unknown_ap_with_empty_registry_is_medium() {
    let audit = audit_str(&Registry::new(), &block("cc:33", "Unregistered"), TrailingBlock::Emit);
    let report = audit.report;

    assert_eq!(report.medium.len(), 1);
    assert_eq!(report.medium[0].rule, 8);
    assert_eq!(report.new, 1);
}

#[test]
fn full_site_audit() {
    let (registry, stats) = Registry::load_str(SITE_REGISTRY);
    assert_eq!(stats.inserted, 4);
    assert_eq!(stats.malformed.len(), 1);
    assert_eq!(stats.malformed[0].content, "[known");

    let audit = audit_str(&registry, SITE_SCAN, TrailingBlock::Emit);
    let report = &audit.report;

    assert_eq!(audit.parse.blocks, 6);
    // TSF, beacon interval and RSN lines.
    assert_eq!(audit.parse.skipped, 3);
    assert_eq!(report.total(), 6);
    assert_eq!((report.authorized, report.known, report.new), (2, 2, 2));

    let rules = |severity| -> Vec<u8> { report.bucket(severity).iter().map(|f| f.rule).collect() };
    assert_eq!(rules(Severity::High), vec![7]);
    assert_eq!(rules(Severity::Medium), vec![8]);
    assert_eq!(rules(Severity::Low), vec![3]);
    assert_eq!(rules(Severity::Info), vec![1, 4, 4]);

    let rogue = &report.high[0].access_point;
    assert_eq!(rogue.bssid, "de:ad:be:ef:00:01");
    assert_eq!(rogue.frequency, Some(2462));
    assert_eq!(rogue.last_seen.as_deref(), Some("30 ms ago"));

    assert_eq!(report.medium[0].access_point.ssid, "");
}

#[test]
fn legacy_trailing_mode_misses_the_last_access_point() {
    let (registry, _) = Registry::load_str(SITE_REGISTRY);
    let audit = audit_str(&registry, SITE_SCAN, TrailingBlock::Drop);

    assert_eq!(audit.report.total(), 5);
    assert_eq!(audit.report.known, 1);
    assert!(
        audit
            .report
            .findings()
            .all(|f| f.access_point.bssid != "66:77:88:99:aa:02")
    );
}

#[test]
fn bssid_listed_in_both_sections_stays_authorized() {
    let (registry, stats) =
        Registry::load_str("[authorized]\naa:bb=CorpNet\n[known]\naa:bb=GuestNet\n");
    assert_eq!(stats.cross_listed, 1);
    assert_eq!(registry.known("aa:bb"), Some("GuestNet"));

    let on_corp = audit_str(&registry, &block("aa:bb", "CorpNet"), TrailingBlock::Emit);
    assert_eq!(on_corp.report.info[0].rule, 1);

    // GuestNet is only known-level, so no authorized rule claims it.
    let on_guest = audit_str(&registry, &block("aa:bb", "GuestNet"), TrailingBlock::Emit);
    assert_eq!(on_guest.report.info[0].rule, 4);
    assert_eq!(on_guest.report.known, 1);
}

#[test]
fn authorized_entry_after_known_entry_still_protects_its_ssid() {
    let (registry, stats) =
        Registry::load_str("[known]\naa:bb=GuestNet\n[authorized]\naa:bb=CorpNet\n");
    assert_eq!(stats.cross_listed, 1);

    let own = audit_str(&registry, &block("aa:bb", "CorpNet"), TrailingBlock::Emit);
    assert_eq!(own.report.info.len(), 1);
    assert_eq!(own.report.info[0].rule, 1);

    let rogue = audit_str(&registry, &block("ee:99", "CorpNet"), TrailingBlock::Emit);
    assert_eq!(rogue.report.high.len(), 1);
    assert_eq!(rogue.report.high[0].rule, 7);
}

#[test]
fn ssid_of_a_duplicate_entry_is_still_protected() {
    let (registry, stats) = Registry::load_str("aa:11=CorpNet\naa:11=PayrollNet\n");
    assert_eq!(stats.duplicates, 1);

    let rogue = audit_str(&registry, &block("ee:99", "PayrollNet"), TrailingBlock::Emit);
    assert_eq!(rogue.report.high.len(), 1);
    assert_eq!(rogue.report.high[0].rule, 7);
}

#[test]
fn runs_do_not_share_state() {
    let registry = corp_registry();
    let first = audit_str(&registry, &block("bb:22", "CorpNet"), TrailingBlock::Emit);
    let second = audit_str(&registry, &block("aa:11", "CorpNet"), TrailingBlock::Emit);

    assert_eq!(first.report.high.len(), 1);
    assert!(second.report.high.is_empty());
    assert_eq!(second.report.total(), 1);
}

#[test]
fn parser_and_classifier_compose_by_hand() {
    let (registry, _) = Registry::load_str(SITE_REGISTRY);
    let findings: Vec<_> = parse_str(SITE_SCAN, TrailingBlock::Emit)
        .map(|ap| classify(ap, &registry))
        .collect();

    let audit = audit_str(&registry, SITE_SCAN, TrailingBlock::Emit);
    assert_eq!(findings.len(), audit.report.total());
    assert!(findings.iter().all(|f| audit.report.bucket(f.severity).contains(f)));
}
