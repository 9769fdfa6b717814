use crate::report::RollReport;

pub trait Stringify {
    fn stringify(&mut self, report: &RollReport) -> String {
        if report.values().len() == 1 {
            self.str_single(report)
        } else {
            self.str_many(report)
        }
    }

    fn str_single(&mut self, report: &RollReport) -> String;

    fn str_many(&mut self, report: &RollReport) -> String;
}

/// Plain sentences: `Die shows: 4`, `Dice show: 3 + 5 = 8`.
#[derive(Default)]
pub struct SimpleStringifier;

impl Stringify for SimpleStringifier {
    fn str_single(&mut self, report: &RollReport) -> String {
        format!("Die shows: {}", report.sum())
    }

    fn str_many(&mut self, report: &RollReport) -> String {
        format!("Dice show: {} = {}", report.outcome(), report.sum())
    }
}

/// The total in bold, followed by the individual dice when there are several.
#[derive(Default)]
pub struct MarkdownStringifier;

impl Stringify for MarkdownStringifier {
    fn str_single(&mut self, report: &RollReport) -> String {
        format!("**{}**", report.sum())
    }

    fn str_many(&mut self, report: &RollReport) -> String {
        format!("**{}** ({})", report.sum(), report.outcome())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{vec1, Outcome, TargetBound};

    fn report(faces: crate::common::NonEmpty<u32>) -> RollReport {
        RollReport::new(TargetBound::DEFAULT, Outcome::new(faces))
    }

    #[test]
    fn test_simple() {
        assert_eq!(report(vec1![4]).result::<SimpleStringifier>(), "Die shows: 4");
        assert_eq!(
            report(vec1![3, 5]).result::<SimpleStringifier>(),
            "Dice show: 3 + 5 = 8"
        );
    }

    #[test]
    fn test_markdown() {
        assert_eq!(report(vec1![6]).result::<MarkdownStringifier>(), "**6**");
        assert_eq!(
            report(vec1![1, 2, 6]).result::<MarkdownStringifier>(),
            "**9** (1 + 2 + 6)"
        );
    }
}
