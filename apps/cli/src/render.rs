//! Display rounding and plain-text output.

use std::fmt::Write;

use rust_decimal::{Decimal, RoundingStrategy};

use paymaster_core::{PayrollLineItem, PayrollRun, Payslip};

const LABEL_WIDTH: usize = 26;
const AMOUNT_WIDTH: usize = 16;

fn round(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
}

pub fn rounded_payslip(payslip: &Payslip, decimal_places: u32) -> Payslip {
    Payslip {
        line_item: payslip.line_item.rounded(decimal_places),
        ..payslip.clone()
    }
}

/// Rounds every payslip and every total. Totals are rounded from the exact
/// sums, so they may differ from the sum of the rounded payslips.
pub fn rounded_run(run: &PayrollRun, decimal_places: u32) -> PayrollRun {
    PayrollRun {
        payslips: run
            .payslips
            .iter()
            .map(|slip| rounded_payslip(slip, decimal_places))
            .collect(),
        total_gross: round(run.total_gross, decimal_places),
        total_deductions: round(run.total_deductions, decimal_places),
        total_net: round(run.total_net, decimal_places),
        ..run.clone()
    }
}

fn amount_row(out: &mut String, label: &str, amount: Decimal, decimal_places: u32) {
    let _ = writeln!(
        out,
        "  {:<lw$}{:>aw$.prec$}",
        label,
        round(amount, decimal_places),
        lw = LABEL_WIDTH,
        aw = AMOUNT_WIDTH,
        prec = decimal_places as usize
    );
}

pub fn line_item_text(item: &PayrollLineItem, decimal_places: u32) -> String {
    let mut out = String::new();
    let mut row = |label: &str, amount: Decimal| amount_row(&mut out, label, amount, decimal_places);

    row("Basic salary", item.basic_salary);
    row("HRA", item.hra);
    row("Dearness allowance", item.dearness_allowance);
    row("Conveyance", item.conveyance);
    row("Medical allowance", item.medical_allowance);
    row("Special allowance", item.special_allowance);
    row("Bonus", item.bonus_amount);
    row("Gross salary", item.gross_salary);
    row("Provident fund", item.pf_employee_amount);
    row("ESI", item.esi_employee_amount);
    row("Professional tax", item.professional_tax_amount);
    row("Income tax", item.income_tax_amount);
    row("Total deductions", item.total_deductions);
    row("Net salary", item.net_salary);
    row("Employer PF", item.pf_employer_amount);
    row("Employer ESI", item.esi_employer_amount);
    row("Cost to company", item.cost_to_company);
    out
}

pub fn payslip_text(payslip: &Payslip, decimal_places: u32) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Payslip {} for {} ({}) - {}",
        payslip.period, payslip.employee_name, payslip.emp_code, payslip.company_id
    );
    out.push_str(&line_item_text(&payslip.line_item, decimal_places));
    out
}

pub fn run_text(run: &PayrollRun, decimal_places: u32) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Payroll run for company {} ({})",
        run.company_id, run.period
    );
    let _ = writeln!(
        out,
        "  {:<12}{:<28}{:>amount$}{:>amount$}{:>amount$}",
        "Code",
        "Name",
        "Gross",
        "Deductions",
        "Net",
        amount = AMOUNT_WIDTH
    );
    for slip in &run.payslips {
        let item = &slip.line_item;
        let _ = writeln!(
            out,
            "  {:<12}{:<28}{:>amount$.prec$}{:>amount$.prec$}{:>amount$.prec$}",
            slip.emp_code,
            slip.employee_name,
            round(item.gross_salary, decimal_places),
            round(item.total_deductions, decimal_places),
            round(item.net_salary, decimal_places),
            amount = AMOUNT_WIDTH,
            prec = decimal_places as usize
        );
    }
    amount_row(&mut out, "Total gross", run.total_gross, decimal_places);
    amount_row(&mut out, "Total deductions", run.total_deductions, decimal_places);
    amount_row(&mut out, "Total net", run.total_net, decimal_places);

    if !run.failures.is_empty() {
        let _ = writeln!(out, "Failures:");
        for failure in &run.failures {
            let _ = writeln!(out, "  {}: {}", failure.employee_id, failure.reason);
        }
    }
    out
}
