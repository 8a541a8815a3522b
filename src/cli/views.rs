//! Text renderings of the list, detail and summary screens.

use colored::Colorize;

use crate::{
    aggregate::{self, Classification, ExpenseSummary},
    currency::{format_currency_value, CurrencyCode},
    domain::ExpenseRecord,
    errors::ExpenseError,
};

const MIN_RULE_WIDTH: usize = 40;

/// Colors a rendered amount the way the list and detail screens emphasise it.
pub fn tint(classification: Classification, text: &str) -> String {
    match classification {
        Classification::Highest => text.red().to_string(),
        Classification::Lowest => text.bright_green().to_string(),
        Classification::Normal => text.green().to_string(),
    }
}

struct PanelField {
    key: String,
    value: String,
    tint: Option<Classification>,
}

/// A titled block of `key: value` lines framed by horizontal rules.
pub struct Panel {
    title: String,
    fields: Vec<PanelField>,
}

impl Panel {
    pub fn new<T: Into<String>>(title: T) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.fields.push(PanelField {
            key: key.into(),
            value: value.into(),
            tint: None,
        });
        self
    }

    pub fn with_tinted_field<K, V>(mut self, key: K, value: V, tint: Classification) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.fields.push(PanelField {
            key: key.into(),
            value: value.into(),
            tint: Some(tint),
        });
        self
    }

    pub fn render(&self) -> String {
        let key_width = self
            .fields
            .iter()
            .map(|field| field.key.chars().count())
            .max()
            .unwrap_or(0);

        let mut widest = self.title.chars().count();
        let mut lines = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            let label = format!("{}:", field.key);
            let plain = format!("{:<width$}{}", label, field.value, width = key_width + 3);
            widest = widest.max(plain.chars().count());
            let value = match field.tint {
                Some(classification) => tint(classification, &field.value),
                None => field.value.clone(),
            };
            lines.push(format!("{:<width$}{}", label, value, width = key_width + 3));
        }

        let rule = "─".repeat(widest.max(MIN_RULE_WIDTH));
        let mut output = String::new();
        output.push_str(&self.title);
        output.push('\n');
        output.push_str(&rule);
        output.push('\n');
        for line in &lines {
            output.push_str(line);
            output.push('\n');
        }
        output.push_str(&rule);
        output
    }
}

/// One row per record: id, description, category, and the tinted amount.
pub fn render_list(records: &[ExpenseRecord], code: &CurrencyCode) -> Result<String, ExpenseError> {
    let classified = aggregate::classify_all(records)?;
    let amounts: Vec<String> = records
        .iter()
        .map(|record| format_currency_value(record.amount, code))
        .collect();

    let id_width = column_width("ID", records.iter().map(|r| r.id.to_string().len()));
    let desc_width = column_width(
        "Description",
        records.iter().map(|r| r.description.chars().count()),
    );
    let cat_width = column_width("Category", records.iter().map(|r| r.category.chars().count()));
    let amount_width = column_width("Amount", amounts.iter().map(|a| a.chars().count()));

    let mut output = format!(
        "{:>id_width$}  {:<desc_width$}  {:<cat_width$}  {:>amount_width$}",
        "ID", "Description", "Category", "Amount"
    )
    .bold()
    .to_string();

    for ((record, classification), amount) in classified.iter().zip(&amounts) {
        let padded = format!("{:>amount_width$}", amount);
        output.push('\n');
        output.push_str(&format!(
            "{:>id_width$}  {:<desc_width$}  {:<cat_width$}  {}",
            record.id,
            record.description,
            record.category,
            tint(*classification, &padded)
        ));
    }
    Ok(output)
}

fn column_width(header: &str, cells: impl Iterator<Item = usize>) -> usize {
    cells.fold(header.len(), usize::max)
}

/// Detail panel for one record, tinted relative to the whole set.
pub fn render_detail(
    record: &ExpenseRecord,
    records: &[ExpenseRecord],
    code: &CurrencyCode,
) -> Result<String, ExpenseError> {
    let max = aggregate::max_expense(records)?;
    let min = aggregate::min_expense(records)?;
    let classification = aggregate::classify(record, max, min);
    tracing::debug!(
        id = record.id,
        classification = classification.label(),
        "classified expense for detail view"
    );

    Ok(Panel::new(record.description.as_str())
        .with_tinted_field(
            "Expense",
            format_currency_value(record.amount, code),
            classification,
        )
        .with_field("Category", record.category.as_str())
        .with_field("Date", record.date.format("%Y-%m-%d").to_string())
        .render())
}

pub fn render_summary(summary: &ExpenseSummary, code: &CurrencyCode) -> String {
    Panel::new("Summary")
        .with_field("Total Number of Transactions", summary.count.to_string())
        .with_field("Total Expenses", format_currency_value(summary.total, code))
        .with_tinted_field(
            "Highest Expense",
            format_currency_value(summary.highest, code),
            Classification::Highest,
        )
        .with_tinted_field(
            "Lowest Expense",
            format_currency_value(summary.lowest, code),
            Classification::Lowest,
        )
        .render()
}
