use serde::Serialize;

use crate::search::QueryHit;

/// Links point at the pulpito run browser, keyed by the raw document id.
pub const RUN_BASE_URL: &str = "http://pulpito-ng.ceph.com/";

const UNKNOWN_SUITE: &str = "N/A";

/// One table row in the rendered report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub suite: String,
    pub href: String,
    pub total: u64,
    pub passed: u64,
    pub failed: u64,
    pub dead: u64,
    pub waiting: u64,
    pub queued: u64,
}

/// Maps raw hits to report rows, preserving backend order. Absent counts
/// become 0 and an absent suite becomes "N/A".
pub fn assemble(hits: &[QueryHit]) -> Vec<ReportRow> {
    hits.iter()
        .map(|hit| ReportRow {
            suite: hit
                .source
                .suite
                .clone()
                .unwrap_or_else(|| UNKNOWN_SUITE.to_string()),
            href: format!("{RUN_BASE_URL}{}", hit.id),
            total: hit.source.results.total,
            passed: hit.source.results.pass,
            failed: hit.source.results.fail,
            dead: hit.source.results.dead,
            waiting: hit.source.results.waiting,
            queued: hit.source.results.queued,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::types::{HitResults, HitSource};

    fn hit(id: &str, suite: Option<&str>, results: HitResults) -> QueryHit {
        QueryHit {
            id: id.to_string(),
            source: HitSource {
                suite: suite.map(str::to_string),
                results,
            },
        }
    }

    #[test]
    fn test_assemble_maps_all_fields() {
        let hits = vec![hit(
            "abc123",
            Some("rados"),
            HitResults {
                total: 10,
                pass: 8,
                fail: 2,
                ..Default::default()
            },
        )];

        let rows = assemble(&hits);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.suite, "rados");
        assert_eq!(row.href, "http://pulpito-ng.ceph.com/abc123");
        assert_eq!(row.total, 10);
        assert_eq!(row.passed, 8);
        assert_eq!(row.failed, 2);
        assert_eq!(row.dead, 0);
        assert_eq!(row.waiting, 0);
        assert_eq!(row.queued, 0);
    }

    #[test]
    fn test_assemble_defaults_missing_suite() {
        let rows = assemble(&[hit("x1", None, HitResults::default())]);
        assert_eq!(rows[0].suite, "N/A");
        assert_eq!(rows[0].total, 0);
    }

    #[test]
    fn test_assemble_preserves_backend_order() {
        let hits = vec![
            hit("c", Some("smoke"), HitResults::default()),
            hit("a", Some("rados"), HitResults::default()),
            hit("b", Some("fs"), HitResults::default()),
        ];

        let suites: Vec<_> = assemble(&hits).into_iter().map(|r| r.suite).collect();
        assert_eq!(suites, vec!["smoke", "rados", "fs"]);
    }

    #[test]
    fn test_assemble_empty_is_empty() {
        assert!(assemble(&[]).is_empty());
    }
}
