use super::*;
use saude_core::Region;

#[test]
fn test_parse_load_with_filters() {
    let cli = Cli::try_parse_from([
        "saude", "load", "--regiao", "sul", "--regiao", "norte", "--idosos", "5", "25", "--pib",
        "10000", "40000",
    ])
    .unwrap();
    match cli.command {
        Commands::Load(args) => {
            assert_eq!(args.regioes, vec![Region::Sul, Region::Norte]);
            assert_eq!(args.idosos, Some(vec![5.0, 25.0]));
            assert_eq!(args.pib, Some(vec![10_000.0, 40_000.0]));
            assert_eq!(args.output, OutputFormat::Table);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_load_defaults() {
    let cli = Cli::try_parse_from(["saude", "load"]).unwrap();
    assert_eq!(cli.global.row_cap, 1000);
    assert_eq!(cli.global.timeout_secs, 10);
    match cli.command {
        Commands::Load(args) => {
            assert!(args.regioes.is_empty());
            assert_eq!(args.idosos, None);
            assert_eq!(args.limit, 10);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_synth_overrides() {
    let cli = Cli::try_parse_from([
        "saude", "synth", "--seed", "7", "--rows", "50", "--output", "json",
    ])
    .unwrap();
    match cli.command {
        Commands::Synth(args) => {
            assert_eq!(args.seed, 7);
            assert_eq!(args.rows, 50);
            assert_eq!(args.output, OutputFormat::Json);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_global_row_cap_after_subcommand() {
    let cli = Cli::try_parse_from(["saude", "load", "--row-cap", "6000"]).unwrap();
    assert_eq!(cli.global.row_cap, 6000);
}

#[test]
fn test_idosos_requires_both_bounds() {
    assert!(Cli::try_parse_from(["saude", "load", "--idosos", "5"]).is_err());
}

#[test]
fn test_unknown_region_is_rejected() {
    assert!(Cli::try_parse_from(["saude", "load", "--regiao", "atlantida"]).is_err());
}
