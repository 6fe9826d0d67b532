pub mod json;
pub mod terminal;

use crate::verdict::Verdict;

pub trait Reporter {
    fn report(&self, verdicts: &[Verdict]) -> String;
}
