//! Running holdings carried from one projection year to the next

/// Position of the investor at a point in the projection
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionState {
    /// Last completed year (0 before the first year)
    pub year: u32,

    /// Shares held, fractional after reinvestment or savings purchases
    pub shares: f64,

    /// Cumulative euros put in: initial amount, savings and reinvested dividends
    pub total_invested: f64,

    /// Cumulative dividends received
    pub cumulative_dividends: f64,
}

impl ProjectionState {
    /// State right after the initial subscription
    pub fn initial(rounded_amount: f64, price_per_share: f64) -> Self {
        Self {
            year: 0,
            shares: rounded_amount / price_per_share,
            total_invested: rounded_amount,
            cumulative_dividends: 0.0,
        }
    }

    pub fn advance_year(&mut self) {
        self.year += 1;
    }

    /// Buy shares at `share_value` with `amount` euros
    pub fn purchase(&mut self, amount: f64, share_value: f64) {
        self.shares += amount / share_value;
        self.total_invested += amount;
    }

    pub fn receive_dividends(&mut self, amount: f64) {
        self.cumulative_dividends += amount;
    }
}
