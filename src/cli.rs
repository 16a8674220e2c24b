use brew_ratio::models::dimension::Dimension;
use brew_ratio::models::ratio_config::RatioOptions;
use clap::Parser;

/// Without an input file or `--by`, prints the base recipe as one row with
/// empty `by` and `amount` columns.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input CSV file with `by,amount` queries
    pub input: Option<String>,

    /// Quantity to scale by (coffee, sugar, creamer, water, ingredients, total)
    #[arg(long, requires = "amount", conflicts_with = "input")]
    pub by: Option<Dimension>,

    /// Desired amount for the `--by` quantity
    #[arg(long, requires = "by")]
    pub amount: Option<f64>,

    /// Coffee weight [default: 1]
    #[arg(long)]
    pub coffee_ratio: Option<f64>,

    /// Sugar weight [default: 1]
    #[arg(long)]
    pub sugar_ratio: Option<f64>,

    /// Creamer weight [default: 1]
    #[arg(long)]
    pub creamer_ratio: Option<f64>,

    /// Water weight [default: 24]
    #[arg(long)]
    pub water_ratio: Option<f64>,

    /// Deduct 1% of the ingredients from the total
    #[arg(long)]
    pub super_accurate: bool,
}

impl Cli {
    pub fn ratio_options(&self) -> RatioOptions {
        RatioOptions {
            coffee_ratio: self.coffee_ratio,
            sugar_ratio: self.sugar_ratio,
            creamer_ratio: self.creamer_ratio,
            water_ratio: self.water_ratio,
            super_accurate: Some(self.super_accurate),
        }
    }
}
