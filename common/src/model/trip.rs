use serde::{Deserialize, Serialize};

/// A packaged trip: the central record of the catalogue.
///
/// The three price fields exist because different code paths populated
/// documents differently over time (sale price promotions, per-adult
/// pricing, a plain price). `effective_price` is the single place that
/// resolves that inconsistency; nothing else should repeat the chain.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Trip {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub destination: String,
    /// Name of a `TripType`; free text, not a foreign key.
    pub trip_type: String,
    /// Public listing bucket: "holiday", "hotel" or anything else.
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adult_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal_price: Option<f64>,
    pub highlights: Vec<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Trip {
    /// First populated price wins: sale, then adult, then normal, else 0.
    /// Data-quality workaround for unevenly populated documents, not a
    /// pricing rule.
    pub fn effective_price(&self) -> f64 {
        self.sale_price
            .or(self.adult_price)
            .or(self.normal_price)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_price_prefers_sale_price() {
        let trip = Trip {
            sale_price: Some(899.0),
            adult_price: Some(999.0),
            normal_price: Some(1099.0),
            ..Trip::default()
        };
        assert_eq!(trip.effective_price(), 899.0);
    }

    #[test]
    fn effective_price_falls_through_the_chain() {
        let trip = Trip {
            adult_price: Some(999.0),
            ..Trip::default()
        };
        assert_eq!(trip.effective_price(), 999.0);

        let trip = Trip {
            normal_price: Some(1099.0),
            ..Trip::default()
        };
        assert_eq!(trip.effective_price(), 1099.0);
    }

    #[test]
    fn effective_price_defaults_to_zero() {
        assert_eq!(Trip::default().effective_price(), 0.0);
    }

    #[test]
    fn highlights_are_owned_after_clone() {
        let mut original = Trip {
            highlights: vec!["Sunrise hike".into()],
            ..Trip::default()
        };
        let mut draft = original.clone();
        draft.highlights.push("Boat ride".into());
        original.highlights.clear();
        assert_eq!(draft.highlights.len(), 2);
    }
}
