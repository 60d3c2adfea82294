pub mod calculator;
pub mod fees;

pub use calculator::CalculatorPage;
pub use fees::FeesPage;
