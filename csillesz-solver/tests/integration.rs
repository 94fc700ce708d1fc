use std::fs;

use csillesz_core::AstroError;
use csillesz_solver::commands::{dispatch, CommandOutput};
use csillesz_solver::config::SolverConfig;
use csillesz_solver::session::Session;
use csillesz_solver::Error;
use csillesz_time::DaylightSavingRule;

fn run(session: &mut Session, line: &str) -> String {
    match dispatch(session, line).unwrap() {
        CommandOutput::Text(s) => s,
        other => panic!("expected text from {:?}, got {:?}", line, other),
    }
}

fn value_after<'a>(text: &'a str, label: &str) -> &'a str {
    text.lines()
        .find_map(|l| l.strip_prefix(label)?.strip_prefix(':'))
        .map(str::trim)
        .unwrap_or_else(|| panic!("no {} in\n{}", label, text))
}

fn leading_number(value: &str) -> f64 {
    let end = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
        .unwrap_or(value.len());
    value[..end].parse().unwrap()
}

// --- Conversions through the dispatcher ---

#[test]
fn horizontal_round_trip_through_equatorial_i() {
    let mut session = Session::default();
    let eq = run(&mut session, "HOR2EQ1 47.5 35 120");
    let dec = leading_number(value_after(&eq, "Declination"));
    let ha = leading_number(value_after(&eq, "Hour angle"));

    let hor = run(&mut session, &format!("EQ12HOR 47.5 {} 0 HA {}", dec, ha));
    let alt = leading_number(value_after(&hor, "Altitude"));
    let az = leading_number(value_after(&hor, "Azimuth"));
    assert!((alt - 35.0).abs() < 1e-2, "{}", hor);
    assert!((az - 120.0).abs() < 1e-2, "{}", hor);
}

#[test]
fn equatorial_ii_chain_agrees_with_equatorial_i() {
    let mut session = Session::default();
    let via_ii = run(&mut session, "EQ22HOR 47.5 10 20 RA 7");
    let via_i = run(&mut session, "EQ12HOR 47.5 20 10 HA 3");
    assert_eq!(via_ii, via_i);
}

#[test]
fn sexagesimal_arguments() {
    let mut session = Session::default();
    assert_eq!(
        run(&mut session, "EQ12EQ2 1:30 2:30"),
        run(&mut session, "EQ12EQ2 1.5 2.5")
    );
}

#[test]
fn input_mistakes_are_recoverable() {
    let mut session = Session::default();
    for line in [
        "CITYDIST Budapest Atlantis",
        "LST 47.5 19 2023-02-29 10:00",
        "DIST 1 2 3",
        "EQ12HOR 47.5 20 10 RA",
        "FROBNICATE",
    ] {
        let err = dispatch(&mut session, line).unwrap_err();
        assert!(err.is_recoverable(), "{}: {}", line, err);
    }
}

#[test]
fn meridian_combination_errors() {
    let mut session = Session::default();
    for line in ["EQ12HOR 47.5 20 10", "EQ22EQ1 10 RA 1 HA 2"] {
        let err = dispatch(&mut session, line).unwrap_err();
        assert!(
            matches!(err, Error::Astro(AstroError::InvalidArgumentCombination { .. })),
            "{}: {}",
            line,
            err
        );
    }
}

// --- Sidereal time ---

#[test]
fn lst_rolls_back_across_year_end() {
    let mut session = Session::default();
    let out = run(&mut session, "CITYLST Tokyo 2024-01-01 05:00");
    assert_eq!(value_after(&out, "Universal time"), "2023-12-31 20:00 UT");
    assert_eq!(value_after(&out, "Zone offset"), "+9h");
}

#[test]
fn lst_rolls_forward_west_of_greenwich() {
    let mut session = Session::default();
    let out = run(&mut session, "CITYLST NewYork 2023-12-31 20:30");
    assert_eq!(value_after(&out, "Zone offset"), "-5h");
    assert_eq!(value_after(&out, "Universal time"), "2024-01-01 01:30 UT");
}

#[test]
fn lst_before_christ_skips_year_zero() {
    let mut session = Session::default();
    let out = run(&mut session, "LST 47.5 19 -1-01-01 00:30");
    assert_eq!(value_after(&out, "Universal time"), "-0002-12-31 23:30 UT");
}

#[test]
fn dst_command_changes_lst() {
    let mut session = Session::default();
    let summer = run(&mut session, "CITYLST Budapest 2024-07-01 12:00");
    assert_eq!(value_after(&summer, "Zone offset"), "+2h");

    run(&mut session, "DST none");
    assert_eq!(session.sidereal.daylight_saving(), DaylightSavingRule::None);
    let standard = run(&mut session, "CITYLST Budapest 2024-07-01 12:00");
    assert_eq!(value_after(&standard, "Zone offset"), "+1h");
    assert_eq!(value_after(&standard, "Universal time"), "2024-07-01 11:00 UT");
}

// --- Config and city files ---

#[test]
fn config_file_with_city_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("cities.toml"),
        "[cities.Sopron]\nlatitude = 47.6817\nlongitude = 16.5845\n",
    )
    .unwrap();
    let config_path = dir.path().join("csillesz.toml");
    fs::write(
        &config_path,
        "cities_file = \"cities.toml\"\ndaylight_saving = \"none\"\n",
    )
    .unwrap();

    let config = SolverConfig::from_file(&config_path).unwrap();
    assert_eq!(config.cities_file, Some(dir.path().join("cities.toml")));

    let mut session = Session::from_config(&config).unwrap();
    assert_eq!(session.sidereal.daylight_saving(), DaylightSavingRule::None);

    let out = run(&mut session, "CITYDIST sopron Budapest");
    assert!(out.contains("47.6817°, 16.5845°"), "{}", out);

    let CommandOutput::Table { rows, .. } = dispatch(&mut session, "CITIES").unwrap() else {
        panic!("expected table");
    };
    assert_eq!(rows.len(), 22);
}

#[test]
fn earth_radius_from_config() {
    let config = SolverConfig::from_toml_str("earth_radius_m = 3189000.0").unwrap();
    let mut half = Session::from_config(&config).unwrap();
    let mut full = Session::default();

    let d_half = leading_number(value_after(&run(&mut half, "DIST 0 0 0 90"), "Distance"));
    let d_full = leading_number(value_after(&run(&mut full, "DIST 0 0 0 90"), "Distance"));
    assert!((d_full - 2.0 * d_half).abs() < 1e-2);
}

#[test]
fn missing_city_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("csillesz.toml");
    fs::write(&config_path, "cities_file = \"nope.toml\"\n").unwrap();

    let config = SolverConfig::from_file(&config_path).unwrap();
    let err = Session::from_config(&config).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(!err.is_recoverable());
}

#[test]
fn unknown_location_carries_name() {
    let mut session = Session::default();
    let err = dispatch(&mut session, "CITYLST Gondor 2024-01-01 00:00").unwrap_err();
    assert!(matches!(
        err,
        Error::Astro(AstroError::UnknownLocation { ref name }) if name == "Gondor"
    ));
}
