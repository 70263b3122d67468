// src/annotation/category.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// One bucket of the fixed annotation taxonomy.
///
/// The variant is the stable identity used as the store key; `label()` is
/// the display text and the export column header, so relabelling a bucket
/// never invalidates annotations made in the same session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    BotResponse,
    Hva,
    AbFeatureHvaQuery,
    PersonalizedAccountQuery,
    PromoFreebieQuery,
    HelpPageCustomerService,
    NonProfitQuery,
    PersonalPrimeQuery,
    CustomerBehavior,
    OtherQueries,
    OverallObservations,
}

impl Category {
    /// Every category, in taxonomy (and export column) order.
    pub const ALL: [Category; 11] = [
        Category::BotResponse,
        Category::Hva,
        Category::AbFeatureHvaQuery,
        Category::PersonalizedAccountQuery,
        Category::PromoFreebieQuery,
        Category::HelpPageCustomerService,
        Category::NonProfitQuery,
        Category::PersonalPrimeQuery,
        Category::CustomerBehavior,
        Category::OtherQueries,
        Category::OverallObservations,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::BotResponse => "Bot Response",
            Category::Hva => "HVA",
            Category::AbFeatureHvaQuery => "AB feature/HVA Related Query",
            Category::PersonalizedAccountQuery => "Personalized/Account-Specific Queries",
            Category::PromoFreebieQuery => "Promo & Freebie Related Queries",
            Category::HelpPageCustomerService => "Help-page/Direct Customer Service",
            Category::NonProfitQuery => "BP for Non-Profit Organisation Related Query",
            Category::PersonalPrimeQuery => "Personal Prime Related Query",
            Category::CustomerBehavior => "Customer Behavior",
            Category::OtherQueries => "Other Queries",
            Category::OverallObservations => "Overall Observations",
        }
    }

    /// Position of this category in `Category::ALL`.
    pub fn index(self) -> usize {
        Category::ALL
            .iter()
            .position(|c| *c == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_has_eleven_distinct_labels() {
        let mut labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels.len(), 11);
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), 11);
    }

    #[test]
    fn index_follows_taxonomy_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
        assert_eq!(Category::ALL[0].label(), "Bot Response");
        assert_eq!(Category::ALL[10].label(), "Overall Observations");
    }
}
