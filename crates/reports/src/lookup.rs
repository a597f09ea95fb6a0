use serde::Serialize;

use stockcast_core::{CustomerKey, ProbabilityRecord, RecommendationRecord};

/// Projection of one recommendation row for the lookup result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationEntry {
    pub item_name: String,
    pub predicted_quantity: f64,
    pub selection_probability: f64,
}

/// Everything the customer view shows for one matched customer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerInsight {
    pub customer_id: CustomerKey,
    /// Order probability as a percentage, rounded to 2 decimal places.
    pub probability_pct: f64,
    pub recommendations: Vec<RecommendationEntry>,
}

/// Order probability as a displayable percentage with 2 decimal places,
/// rounding halves away from zero (0.8675 -> 86.75, 0.8666 -> 86.66).
pub fn display_probability(order_probability: f64) -> f64 {
    (order_probability * 100.0 * 100.0).round() / 100.0
}

/// Exact-match lookup of one customer across the forecast and the
/// recommendation tables.
///
/// A miss is `None`, a normal negative result rather than an error. Keys on
/// both sides were canonicalized by the same rule, so a numeric id stored
/// as text still matches numeric input and vice versa.
pub fn customer_lookup(
    probabilities: &[ProbabilityRecord],
    recommendations: &[RecommendationRecord],
    key: &CustomerKey,
) -> Option<CustomerInsight> {
    let matched = probabilities.iter().find(|r| &r.customer_id == key)?;

    let recs = recommendations
        .iter()
        .filter(|r| &r.customer_id == key)
        .map(|r| RecommendationEntry {
            item_name: r.item_name.clone(),
            predicted_quantity: r.predicted_quantity,
            selection_probability: r.selection_probability,
        })
        .collect();

    Some(CustomerInsight {
        customer_id: matched.customer_id.clone(),
        probability_pct: display_probability(matched.order_probability),
        recommendations: recs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn prob(id: CustomerKey, p: f64) -> ProbabilityRecord {
        ProbabilityRecord {
            customer_id: id,
            order_probability: p,
        }
    }

    fn rec(id: CustomerKey, item: &str) -> RecommendationRecord {
        RecommendationRecord {
            customer_id: id,
            item_name: item.to_string(),
            predicted_quantity: 2.0,
            selection_probability: 0.7,
        }
    }

    fn sample_tables() -> (Vec<ProbabilityRecord>, Vec<RecommendationRecord>) {
        let probs = vec![
            prob(CustomerKey::Integer(1), 0.8675),
            prob(CustomerKey::Integer(2), 0.25),
            prob(CustomerKey::Text("CUST-9".into()), 0.6),
        ];
        let recs = vec![
            rec(CustomerKey::Integer(1), "Widget"),
            rec(CustomerKey::Integer(2), "Gadget"),
            rec(CustomerKey::Integer(1), "Sprocket"),
        ];
        (probs, recs)
    }

    #[test]
    fn match_returns_percentage_and_all_of_that_customers_recs() {
        let (probs, recs) = sample_tables();
        let insight = customer_lookup(&probs, &recs, &CustomerKey::parse("1")).unwrap();

        assert_eq!(insight.customer_id, CustomerKey::Integer(1));
        assert_eq!(insight.probability_pct, 86.75);
        let items: Vec<&str> = insight
            .recommendations
            .iter()
            .map(|r| r.item_name.as_str())
            .collect();
        assert_eq!(items, vec!["Widget", "Sprocket"]);
    }

    #[test]
    fn text_key_matches_literally() {
        let (probs, recs) = sample_tables();
        let insight = customer_lookup(&probs, &recs, &CustomerKey::parse("CUST-9")).unwrap();
        assert_eq!(insight.probability_pct, 60.0);
        assert!(insight.recommendations.is_empty());
    }

    #[test]
    fn miss_is_none_not_another_customer() {
        let (probs, recs) = sample_tables();
        assert!(customer_lookup(&probs, &recs, &CustomerKey::parse("999")).is_none());
        assert!(customer_lookup(&probs, &recs, &CustomerKey::parse("CUST-1")).is_none());
    }

    #[test]
    fn lookup_is_idempotent() {
        let (probs, recs) = sample_tables();
        let key = CustomerKey::parse("2");
        let first = customer_lookup(&probs, &recs, &key);
        let second = customer_lookup(&probs, &recs, &key);
        assert_eq!(first, second);
    }

    #[test]
    fn probability_rounds_half_away_from_zero_at_two_places() {
        assert_eq!(display_probability(0.8675), 86.75);
        assert_eq!(display_probability(0.8666), 86.66);
        assert_eq!(display_probability(0.866666), 86.67);
        assert_eq!(display_probability(1.0), 100.0);
        assert_eq!(display_probability(0.0), 0.0);
    }

    proptest! {
        /// Property: a hit always names the queried customer, and a repeat of
        /// the same lookup over the same tables gives the same answer.
        #[test]
        fn hit_names_the_queried_customer(
            ids in prop::collection::vec(0i64..50, 1..20),
            queried in 0i64..50,
        ) {
            let probs: Vec<ProbabilityRecord> = ids
                .iter()
                .map(|id| prob(CustomerKey::Integer(*id), 0.5))
                .collect();
            let key = CustomerKey::Integer(queried);

            let result = customer_lookup(&probs, &[], &key);
            match &result {
                Some(insight) => prop_assert_eq!(&insight.customer_id, &key),
                None => prop_assert!(!ids.contains(&queried)),
            }
            prop_assert_eq!(customer_lookup(&probs, &[], &key), result);
        }
    }
}
