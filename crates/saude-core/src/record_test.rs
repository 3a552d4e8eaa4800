use super::*;

const TOL: f64 = 1e-9;

#[test]
fn test_percentual_idosos() {
    let d = derive_indicators(100001, 200_000, 30_000, None, None, None).unwrap();
    assert!((d.percentual_idosos - 15.0).abs() < TOL);
}

#[test]
fn test_unmatched_relations_stay_none() {
    // No hospitalization or procedure match: derived fields must be None,
    // not zero.
    let d = derive_indicators(100001, 200_000, 30_000, None, None, None).unwrap();
    assert_eq!(d.internacoes_por_1000, None);
    assert_eq!(d.procedimentos_por_1000, None);
    assert_eq!(d.gasto_internacao_per_capita, None);
}

#[test]
fn test_hospitalization_indicators() {
    let d = derive_indicators(100001, 200_000, 30_000, Some(400), Some(2500.0), None).unwrap();
    assert!((d.internacoes_por_1000.unwrap() - 2.0).abs() < TOL);
    assert!((d.gasto_internacao_per_capita.unwrap() - 5.0).abs() < TOL);
    assert_eq!(d.procedimentos_por_1000, None);
}

#[test]
fn test_procedure_indicator() {
    let d = derive_indicators(100001, 50_000, 5_000, None, None, Some(1_500)).unwrap();
    assert!((d.procedimentos_por_1000.unwrap() - 30.0).abs() < TOL);
}

#[test]
fn test_gasto_needs_both_count_and_mean() {
    // A count without a mean (or vice versa) cannot price admissions.
    let d = derive_indicators(1, 10_000, 1_000, Some(10), None, None).unwrap();
    assert!(d.internacoes_por_1000.is_some());
    assert_eq!(d.gasto_internacao_per_capita, None);
}

#[test]
fn test_zero_population_is_an_error() {
    let err = derive_indicators(4200, 0, 0, Some(1), Some(1.0), None).unwrap_err();
    match err {
        CoreError::NonPositivePopulation { codigo_ibge, value } => {
            assert_eq!(codigo_ibge, 4200);
            assert_eq!(value, 0);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_negative_population_is_an_error() {
    assert!(derive_indicators(1, -5, 0, None, None, None).is_err());
}

#[test]
fn test_region_round_trip() {
    for region in Region::ALL {
        let parsed: Region = region.name().to_ascii_lowercase().parse().unwrap();
        assert_eq!(parsed, region);
    }
    assert!("amazonia".parse::<Region>().is_err());
}

#[test]
fn test_region_serde_names() {
    let json = serde_json::to_string(&Region::CentroOeste).unwrap();
    assert_eq!(json, "\"Centro-Oeste\"");
    let back: Region = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Region::CentroOeste);
}
