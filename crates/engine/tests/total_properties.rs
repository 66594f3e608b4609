//! `Languages::total` against per-language sums over synthetic reports.

use std::collections::BTreeMap;

use langstat_core::{CodeStats, LanguageType, Report};
use langstat_engine::Languages;
use proptest::prelude::*;

fn any_entry() -> impl Strategy<Value = (LanguageType, Report)> {
    (
        prop::sample::select(LanguageType::list().to_vec()),
        "[a-z]{1,8}\\.[a-z]{1,3}",
        0usize..1_000,
        0usize..1_000,
        0usize..1_000,
    )
        .prop_map(|(lang, name, code, comments, blanks)| {
            let report = Report {
                name,
                stats: CodeStats {
                    blanks,
                    code,
                    comments,
                    blobs: BTreeMap::new(),
                },
                inaccurate: false,
            };
            (lang, report)
        })
}

proptest! {
    #[test]
    fn test_total_is_sum_of_languages(entries in prop::collection::vec(any_entry(), 0..40)) {
        let mut languages = Languages::new();
        for (lang, report) in entries.clone() {
            languages.add_report(lang, report);
        }

        let total = languages.total();
        let per_language = |metric: fn(&langstat_core::Language) -> usize| -> usize {
            languages.iter().map(|(_, language)| metric(language)).sum()
        };
        prop_assert_eq!(total.code, per_language(|l| l.code));
        prop_assert_eq!(total.comments, per_language(|l| l.comments));
        prop_assert_eq!(total.blanks, per_language(|l| l.blanks));
        prop_assert_eq!(total.files(), per_language(langstat_core::Language::files));
        prop_assert_eq!(languages.files().values().sum::<usize>(), entries.len());

        prop_assert_eq!(total.code, entries.iter().map(|(_, r)| r.stats.code).sum::<usize>());
        prop_assert_eq!(languages.total_plain()["files"], entries.len());
        prop_assert_eq!(languages.total_plain()["lines"], total.lines());
    }
}
