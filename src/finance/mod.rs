//! Loan amortization (EMI) calculation.
//!
//! Used by the loans & legal page and the services page. Standard formula
//! `P·r·(1+r)^n / ((1+r)^n − 1)` with a monthly rate and tenure in months.

/// Result of an EMI calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmiQuote {
    /// Monthly installment in rupees, unrounded.
    pub monthly_payment: f64,
    pub months: u32,
    pub monthly_rate: f64,
}

/// Compute the EMI for `principal` rupees at `annual_rate_percent` over
/// `years`. Returns `None` when any input is zero, negative or not finite;
/// the calculator simply shows nothing in that case.
pub fn emi(principal: f64, annual_rate_percent: f64, years: f64) -> Option<EmiQuote> {
    if !principal.is_finite() || !annual_rate_percent.is_finite() || !years.is_finite() {
        return None;
    }
    if principal <= 0.0 || annual_rate_percent <= 0.0 || years <= 0.0 {
        return None;
    }

    let monthly_rate = annual_rate_percent / 12.0 / 100.0;
    let months = (years * 12.0).round();
    if months < 1.0 {
        return None;
    }

    let growth = (1.0 + monthly_rate).powf(months);
    let monthly_payment = principal * monthly_rate * growth / (growth - 1.0);

    Some(EmiQuote {
        monthly_payment,
        months: months as u32,
        monthly_rate,
    })
}
