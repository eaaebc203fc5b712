#[cfg(test)]
mod tests {
    use esg_dashboard::hooks::use_fetch::FetchState;
    use esg_dashboard::mock_data;
    use esg_dashboard::models::{
        analytics::{Period, aggregate},
        emissions::{EmissionEntry, EmissionsLedger, EntryDraft, FuelType, PendingChange},
        error::AppError,
        review::ReviewFlow,
        section::Section,
    };
    use esg_dashboard::services::{
        api::{ApiConfig, EsgClient, error_for_status},
        auth::AuthContext,
    };
    use esg_dashboard::utils::{
        chart::{ChartError, SeriesPoint, chart_points, polyline_points, series_max},
        metrics::{
            MetricInput, MetricsError, circumference, donut_segments, percentage_of_max,
            percentages_of_total, shares_or_zero,
        },
    };

    // Helper function to build metric inputs from plain values
    fn inputs(values: &[f64]) -> Vec<MetricInput> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| MetricInput::new(format!("Item {i}"), *v))
            .collect()
    }

    // Helper function to create a diesel entry
    fn diesel(facility: &str, quantity: f64) -> EmissionEntry {
        EmissionEntry {
            month: 3,
            year: 2024,
            facility_id: facility.to_string(),
            fuel_type: FuelType::Diesel,
            quantity,
            emission_factor: FuelType::Diesel.default_factor(),
            use_custom: false,
        }
    }

    // Deterministic pseudo-random series for property checks
    fn series(seed: u64, len: usize) -> Vec<f64> {
        let mut state = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        (0..len)
            .map(|_| {
                state = state
                    .wrapping_mul(6_364_136_223_846_793_005)
                    .wrapping_add(1_442_695_040_888_963_407);
                ((state >> 33) % 10_000) as f64 / 7.0
            })
            .collect()
    }

    #[test]
    fn test_percentages_scenario() {
        let shares = percentages_of_total(&inputs(&[25.0, 40.0, 35.0])).unwrap();
        let percentages: Vec<f64> = shares.iter().map(|s| s.percentage_of_total).collect();
        assert_eq!(percentages, vec![25.0, 40.0, 35.0]);
        assert_eq!(shares[1].category, "Item 1");
    }

    #[test]
    fn test_percentages_sum_to_100() {
        for seed in 0..200 {
            let len = 1 + (seed as usize % 12);
            let mut values = series(seed, len);
            values[0] += 1.0; // keep the total positive
            let shares = percentages_of_total(&inputs(&values)).unwrap();
            let sum: f64 = shares.iter().map(|s| s.percentage_of_total).sum();
            assert!((sum - 100.0).abs() < 1e-9, "seed {seed}: sum {sum}");
            assert_eq!(shares.len(), values.len());
        }
    }

    #[test]
    fn test_percentages_guards() {
        assert_eq!(percentages_of_total(&[]), Err(MetricsError::EmptyInput));
        assert_eq!(
            percentages_of_total(&inputs(&[0.0, 0.0])),
            Err(MetricsError::ZeroTotal)
        );

        let zeroed = shares_or_zero(&inputs(&[0.0, f64::NAN]));
        assert!(zeroed.iter().all(|s| s.percentage_of_total == 0.0));
        assert!(shares_or_zero(&[]).is_empty());
    }

    #[test]
    fn test_percentage_of_max() {
        assert_eq!(percentage_of_max(&[10.0, 20.0, 40.0]), vec![25.0, 50.0, 100.0]);
        assert_eq!(percentage_of_max(&[0.0, 0.0]), vec![0.0, 0.0]);
    }

    #[test]
    fn test_donut_covers_circumference() {
        let shares = percentages_of_total(&mock_data::scope2_sources()).unwrap();
        let segments = donut_segments(&shares, 40.0);
        let covered: f64 = segments.iter().map(|s| s.length).sum();
        assert!((covered - circumference(40.0)).abs() < 1e-9);
        assert_eq!(segments[0].dash_offset, 0.0);
        assert!((segments[1].dash_offset + segments[0].length).abs() < 1e-9);
    }

    #[test]
    fn test_chart_scenario() {
        let data = [10.0, 20.0, 30.0];
        let points = chart_points(&data, |v| *v, 30.0, 50.0, 100.0).unwrap();
        let xs: Vec<f64> = points.iter().map(|(x, _)| *x).collect();
        assert_eq!(xs, vec![0.0, 50.0, 100.0]);
        assert_eq!(points[2].1, 0.0);
    }

    #[test]
    fn test_polyline_pairs_and_increasing_x() {
        for seed in 0..200 {
            let len = 2 + (seed as usize % 30);
            let data = series(seed, len);
            let max = series_max(&data, |v| *v).max(1.0);
            let width = 320.0;

            let line = polyline_points(&data, |v| *v, max, 80.0, width).unwrap();
            let pairs: Vec<(f64, f64)> = line
                .split(' ')
                .map(|pair| {
                    let (x, y) = pair.split_once(',').unwrap();
                    (x.parse().unwrap(), y.parse().unwrap())
                })
                .collect();

            assert_eq!(pairs.len(), len, "seed {seed}");
            assert_eq!(pairs[0].0, 0.0);
            assert_eq!(pairs[len - 1].0, width);
            assert!(pairs.windows(2).all(|w| w[1].0 > w[0].0), "seed {seed}");
            assert!(pairs.iter().all(|(x, y)| x.is_finite() && y.is_finite()));
        }
    }

    #[test]
    fn test_chart_boundaries() {
        assert_eq!(
            polyline_points(&[5.0], |v| *v, 5.0, 50.0, 100.0),
            Err(ChartError::TooFewPoints(1))
        );

        let flat = polyline_points(&[0.0, 0.0, 0.0], |v| *v, 0.0, 50.0, 100.0).unwrap();
        assert!(!flat.contains("NaN"));
        assert_eq!(flat, "0,50 50,50 100,50");
    }

    #[test]
    fn test_chart_over_aggregated_series() {
        let points: Vec<SeriesPoint> =
            aggregate(&mock_data::monthly_emissions(), Period::Quarterly);
        assert_eq!(points.len(), 12);

        let max = series_max(&points, |p| p.value(3));
        let line = polyline_points(&points, |p| p.value(3), max, 100.0, 600.0).unwrap();
        assert_eq!(line.split(' ').count(), 12);
    }

    #[test]
    fn test_add_review_confirm_flow() {
        let mut ledger = EmissionsLedger::new(vec![diesel("FAC-001", 1000.0)]);
        let mut flow: ReviewFlow<PendingChange> = ReviewFlow::default();

        let draft = EntryDraft {
            month: "4".to_string(),
            year: "2024".to_string(),
            facility_id: "FAC-009".to_string(),
            fuel_type: "natural_gas".to_string(),
            quantity: "500".to_string(),
            emission_factor: String::new(),
            use_custom: false,
        };
        let entry = draft.validate().unwrap();
        assert!(flow.submit(PendingChange::Add(entry)));

        // Nothing is merged while the change is under review
        assert_eq!(ledger.len(), 1);

        let change = flow.confirm().unwrap();
        ledger.apply(change).unwrap();
        assert!(flow.is_committed());
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.get(1).unwrap().facility_id, "FAC-009");
        assert!((ledger.total_tonnes() - (2.68 + 1.01)).abs() < 1e-9);

        assert!(flow.reset());
        assert!(flow.is_editing());
    }

    #[test]
    fn test_edit_review_back_to_form() {
        let ledger = EmissionsLedger::new(vec![diesel("FAC-001", 1000.0)]);
        let mut flow = ReviewFlow::default();

        let mut draft = EntryDraft::from_entry(ledger.get(0).unwrap());
        draft.quantity = "1500".to_string();
        let entry = draft.validate().unwrap();
        flow.submit(PendingChange::Replace { index: 0, entry });

        // Confirming is not possible twice, and editing returns the payload
        let back = flow.edit().unwrap();
        assert!(back.is_edit());
        assert_eq!(EntryDraft::from_entry(back.entry()).quantity, "1500");
        assert_eq!(flow.confirm(), None);

        flow.submit(back);
        flow.cancel();
        assert_eq!(flow.pending(), None);
        assert_eq!(ledger.get(0).unwrap().quantity, 1000.0);
    }

    #[test]
    fn test_replace_out_of_range_is_rejected() {
        let mut ledger = EmissionsLedger::new(vec![diesel("FAC-001", 10.0)]);
        let err = ledger
            .apply(PendingChange::Replace {
                index: 4,
                entry: diesel("FAC-002", 10.0),
            })
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_auth_context() {
        let auth = AuthContext::from_json(r#"{"accessToken":"tok-123"}"#).unwrap();
        assert_eq!(auth.bearer().unwrap(), "tok-123");

        let anonymous = AuthContext::from_json("{}").unwrap();
        assert!(!anonymous.is_authenticated());
        assert!(matches!(anonymous.bearer(), Err(AppError::AuthError(_))));

        assert!(AuthContext::from_json("not json").is_err());
    }

    #[test]
    fn test_client_configuration() {
        let config = ApiConfig::builder()
            .base_url("https://esg.example.org/api")
            .build();
        let client = EsgClient::with_config(config, AuthContext::anonymous()).unwrap();
        assert_eq!(
            client.config().endpoint("custom-targets/getCustomTargets"),
            "https://esg.example.org/api/custom-targets/getCustomTargets"
        );
    }

    #[test]
    fn test_status_errors() {
        assert!(matches!(error_for_status(403, ""), AppError::AuthError(_)));
        assert!(matches!(error_for_status(429, ""), AppError::RateLimited));
        assert!(error_for_status(502, "bad gateway").is_retryable());
        assert!(!error_for_status(400, "bad request").is_retryable());
    }

    #[test]
    fn test_fetch_state_surfaces_errors() {
        let state: FetchState<Vec<i32>> =
            FetchState::from_result(Err(AppError::ApiError("Token expired".to_string())));
        assert_eq!(state.error(), Some("API error: Token expired"));
        assert!(!state.is_loading());

        let loaded = FetchState::from_result(Ok(vec![1, 2]));
        assert_eq!(loaded.clone().data().map(|d| d.len()), Some(2));
    }

    #[test]
    fn test_section_round_trip() {
        for section in Section::all() {
            assert_eq!(section.slug().parse::<Section>().unwrap(), *section);
        }
        assert!("settings".parse::<Section>().is_err());
    }
}
