use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

const CHICAGO: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1423854,2017-06-23 15:09:32,2017-06-23 15:14:53,321,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0
955915,2017-05-25 18:19:03,2017-05-25 18:45:53,1610,Theater on the Lake,Sheffield Ave & Waveland Ave,Subscriber,Female,1992.0
9031,2017-01-04 08:27:49,2017-01-04 08:34:45,416,May St & Taylor St,Wood St & Taylor St,Subscriber,Male,1981.0
304487,2017-03-06 13:49:38,2017-03-06 13:55:28,350,Christiana Ave & Lawrence Ave,St. Louis Ave & Balmoral Ave,Subscriber,Male,1986.0
45207,2017-01-17 14:53:07,2017-01-17 15:02:01,534,Clark St & Randolph St,Desplaines St & Jackson Blvd,Customer,,
";

const WASHINGTON: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
482740,2017-03-11 10:40:00,2017-03-11 10:46:00,402.549,Yuma St & Tenley Circle NW,Connecticut Ave & Yuma St NW,Subscriber
1330037,2017-05-30 01:02:59,2017-05-30 01:13:37,637.251,17th St & Massachusetts Ave NW,5th & K St NW,Subscriber
";

struct Fixture {
    dir: tempfile::TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        write_file(&dir.path().join("data").join("chicago.csv"), CHICAGO);
        write_file(&dir.path().join("data").join("washington.csv"), WASHINGTON);
        Self { dir }
    }

    fn data_dir(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    /// Isolate from any real user config
    fn command(&self) -> Command {
        let mut cmd = Command::new(bikeshare_bin());
        cmd.env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join(".config"))
            .env_remove("RUST_LOG")
            .arg("--data-dir")
            .arg(self.data_dir());
        cmd
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, content).expect("write test file");
}

fn bikeshare_bin() -> PathBuf {
    std::env::var("CARGO_BIN_EXE_bikeshare")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
            path.push("target");
            path.push("debug");
            if cfg!(windows) {
                path.push("bikeshare.exe");
            } else {
                path.push("bikeshare");
            }
            path
        })
}

fn run(cmd: &mut Command) -> (bool, String, String) {
    let output = cmd.output().expect("run bikeshare");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn json_all_filters_keeps_every_row() {
    let fx = Fixture::new();
    let (ok, stdout, stderr) = run(fx.command().args(["--city", "chicago", "--json"]));
    assert!(ok, "stderr: {stderr}");

    let json: Value = serde_json::from_str(&stdout).expect("json");
    assert_eq!(json["records"], 5);
    assert_eq!(json["filter"]["month"], "all");
    assert_eq!(json["time"]["month"]["name"], "January");
    assert_eq!(json["time"]["month"]["count"], 2);
    assert_eq!(json["duration"]["total_seconds"], 3231.0);
    assert_eq!(json["user"]["user_types"][0]["value"], "Subscriber");
    assert_eq!(json["user"]["user_types"][0]["count"], 4);
    assert_eq!(json["user"]["genders"][0]["value"], "Male");
    assert_eq!(json["user"]["genders"][0]["count"], 3);
    assert_eq!(json["user"]["birth_years"]["earliest"], 1981);
    assert_eq!(json["user"]["birth_years"]["most_recent"], 1992);
    assert_eq!(json["user"]["birth_years"]["most_common"], 1992);
}

#[test]
fn json_month_and_day_filter() {
    let fx = Fixture::new();
    let (ok, stdout, stderr) = run(fx.command().args([
        "--city", "chicago", "--month", "january", "--day", "tuesday", "-j",
    ]));
    assert!(ok, "stderr: {stderr}");

    let json: Value = serde_json::from_str(&stdout).expect("json");
    // 2017-01-17 is the only January Tuesday
    assert_eq!(json["records"], 1);
    assert_eq!(json["station"]["start"]["value"], "Clark St & Randolph St");
    assert_eq!(json["user"]["user_types"][0]["value"], "Customer");
    assert_eq!(json["user"]["genders"].as_array().map(Vec::len), Some(0));
}

#[test]
fn washington_omits_gender_and_birth_year() {
    let fx = Fixture::new();
    let (ok, stdout, stderr) = run(fx.command().args(["--city", "washington", "--json"]));
    assert!(ok, "stderr: {stderr}");

    let json: Value = serde_json::from_str(&stdout).expect("json");
    let user = json["user"].as_object().expect("user object");
    assert!(!user.contains_key("genders"));
    assert!(!user.contains_key("birth_years"));
    assert_eq!(json["duration"]["trips"], 3);
}

#[test]
fn empty_filter_result_reports_errors_per_report() {
    let fx = Fixture::new();
    let (ok, stdout, stderr) = run(fx.command().args([
        "--city", "washington", "--month", "february", "--json",
    ]));
    assert!(ok, "stderr: {stderr}");

    let json: Value = serde_json::from_str(&stdout).expect("json");
    assert_eq!(json["records"], 0);
    assert_eq!(json["time"]["error"], "No trips match the selected filters");
    assert_eq!(json["duration"]["error"], "No trips match the selected filters");
    assert!(json["user"]["user_types"].as_array().expect("array").is_empty());
}

#[test]
fn missing_city_file_fails() {
    let fx = Fixture::new();
    let (ok, _stdout, stderr) = run(fx.command().args(["--city", "new york city"]));
    assert!(!ok);
    assert!(stderr.contains("Cannot open"), "stderr: {stderr}");
    assert!(stderr.contains("new_york_city.csv"), "stderr: {stderr}");
}

#[test]
fn missing_required_column_fails() {
    let fx = Fixture::new();
    write_file(
        &fx.data_dir().join("new_york_city.csv"),
        "Start Time,End Time,Trip Duration,End Station,User Type\n\
         2017-06-23 15:09:32,2017-06-23 15:14:53,321,W 52 St & 11 Ave,Subscriber\n",
    );
    let (ok, _stdout, stderr) = run(fx.command().args(["--city", "nyc"]));
    assert!(!ok);
    assert!(stderr.contains("Missing column \"Start Station\""), "stderr: {stderr}");
}

#[test]
fn blank_cells_are_skipped_not_fatal() {
    let fx = Fixture::new();
    write_file(
        &fx.data_dir().join("new_york_city.csv"),
        "Start Time,End Time,Trip Duration,Start Station,End Station,User Type\n\
         2017-06-23 15:09:32,2017-06-23 15:14:53,,,W 52 St & 11 Ave,Subscriber\n\
         2017-06-24 15:09:32,2017-06-24 15:14:53,300,,W 52 St & 11 Ave,Subscriber\n\
         2017-06-25 15:09:32,2017-06-25 15:14:53,100,Broadway & W 60 St,W 52 St & 11 Ave,Customer\n",
    );
    let (ok, stdout, stderr) = run(fx.command().args(["--city", "nyc", "--json"]));
    assert!(ok, "stderr: {stderr}");

    let json: Value = serde_json::from_str(&stdout).expect("json");
    assert_eq!(json["records"], 3);
    assert_eq!(json["duration"]["trips"], 2);
    assert_eq!(json["duration"]["total_seconds"], 400.0);
    assert_eq!(json["duration"]["mean_seconds"], 200.0);
    assert_eq!(json["station"]["start"]["value"], "Broadway & W 60 St");
    assert_eq!(json["station"]["start"]["count"], 1);
    assert_eq!(json["station"]["end"]["count"], 3);
    assert_eq!(json["station"]["pair"]["count"], 1);
}

#[test]
fn invalid_month_flag_fails() {
    let fx = Fixture::new();
    let (ok, _stdout, stderr) = run(fx.command().args(["--city", "chicago", "--month", "july"]));
    assert!(!ok);
    assert!(stderr.contains("Invalid month \"july\""), "stderr: {stderr}");
}

#[test]
fn text_output_prints_every_report() {
    let fx = Fixture::new();
    let (ok, stdout, stderr) = run(fx.command().args(["--city", "chicago", "--no-color"]));
    assert!(ok, "stderr: {stderr}");

    assert!(stdout.contains("You have selected city: CHICAGO, month: ALL, and day: ALL"));
    for heading in [
        "Most Frequent Times of Travel",
        "Most Popular Stations and Trip",
        "Trip Duration",
        "User Stats",
    ] {
        assert!(stdout.contains(heading), "missing {heading}:\n{stdout}");
    }
    assert_eq!(stdout.matches("This took").count(), 4);
    assert!(!stdout.contains('\x1b'));
}

#[test]
fn interactive_session_reprompts_and_restarts() {
    let fx = Fixture::new();
    let mut child = fx
        .command()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn bikeshare");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"boston\nchicago\nall\nall\nyes\nwashington\njune\nall\nno\n")
        .expect("write stdin");

    let output = child.wait_with_output().expect("wait");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert_eq!(stdout.matches("Sorry! This is not a valid input.").count(), 1);
    assert_eq!(stdout.matches("Would you like to restart?").count(), 2);
    assert!(stdout.contains("city: CHICAGO"));
    assert!(stdout.contains("city: WASHINGTON, month: JUNE"));
}
