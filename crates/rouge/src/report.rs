use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static SCORE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(\d+) (ROUGE-\S+) (Average_\w): (\d.\d+) \(95%-conf.int. (\d.\d+) - (\d.\d+)\)",
    )
    .expect("static regex")
});

/// Flatten a ROUGE-1.5.5 report into `rouge_<type>_<measure>` scores.
///
/// Each average also yields `<key>_cb` and `<key>_ce`, the bounds of its confidence interval.
/// Lines that are not score averages are ignored.
pub fn parse_report(report: &str) -> BTreeMap<String, f64> {
    let mut scores = BTreeMap::new();
    for line in report.lines() {
        let Some(caps) = SCORE_LINE.captures(line.trim()) else {
            continue;
        };
        let measure = match &caps[3] {
            "Average_R" => "recall",
            "Average_P" => "precision",
            "Average_F" => "f_score",
            _ => continue,
        };
        let parsed = (
            caps[4].parse::<f64>(),
            caps[5].parse::<f64>(),
            caps[6].parse::<f64>(),
        );
        let (Ok(value), Ok(begin), Ok(end)) = parsed else {
            continue;
        };

        let key = format!("{}_{measure}", caps[2].to_lowercase().replace('-', "_"));
        scores.insert(format!("{key}_cb"), begin);
        scores.insert(format!("{key}_ce"), end);
        scores.insert(key, value);
    }
    scores
}
