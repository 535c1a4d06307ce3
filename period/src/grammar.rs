use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "period.pest"]
pub struct PeriodParser;
