use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
mod test_env;

const BRUMS_SCALES: [&str; 8] = [
    "anger",
    "tension",
    "depression",
    "vigor",
    "fatigue",
    "confusion",
    "happy",
    "calmness",
];

fn setup_test_env() -> (TempDir, std::sync::MutexGuard<'static, ()>) {
    let guard = test_env::lock_test_env();
    let temp_dir = TempDir::new().unwrap();
    (temp_dir, guard)
}

fn get_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("somnoplot").unwrap();
    cmd.env("HOME", temp_dir.path());
    cmd.env_remove("SOMNOPLOT_DATA");
    cmd.current_dir(temp_dir.path());
    cmd
}

fn write_assessments(temp_dir: &TempDir) -> PathBuf {
    let mut header = vec![
        "age".to_string(),
        "BMI".to_string(),
        "PSQI".to_string(),
        "ESS".to_string(),
        "SDS".to_string(),
        "CFQ".to_string(),
        "STAI1".to_string(),
        "STAI2".to_string(),
    ];
    for scale in BRUMS_SCALES {
        header.push(format!("BRUMS_{}1", scale));
        header.push(format!("BRUMS_{}2", scale));
    }

    let mut content = header.join(",");
    content.push('\n');
    for i in 0..10u32 {
        let mut row = vec![
            format!("{}", 22 + i),
            format!("{:.1}", 19.5 + 0.6 * f64::from(i)),
            format!("{}", (i % 8) + 1),
            format!("{}", (i % 10) + 3),
            format!("{}", 42 + 3 * i),
            format!("{}", 20 + 3 * i),
            format!("{}", 33 + 2 * i),
            format!("{}", 29 + i),
        ];
        for s in 0..BRUMS_SCALES.len() as u32 {
            row.push(format!("{}", (i + s) % 6 + 1));
            row.push(format!("{}", (i + s) % 3 + 1));
        }
        content.push_str(&row.join(","));
        content.push('\n');
    }

    let path = temp_dir.path().join("assessments.csv");
    fs::write(&path, content).unwrap();
    path
}

fn assert_png(path: &std::path::Path) {
    assert!(path.exists(), "missing figure: {}", path.display());
    let bytes = fs::read(path).unwrap();
    assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
}

#[test]
fn test_demo_figure() {
    let (temp_dir, _guard) = setup_test_env();
    let data = write_assessments(&temp_dir);

    get_cmd(&temp_dir)
        .args(["--data", data.to_str().unwrap(), "demo"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Fig_demo.png"));

    assert_png(&temp_dir.path().join("Fig_demo.png"));

    drop(temp_dir);
}

#[test]
fn test_sq_figure() {
    let (temp_dir, _guard) = setup_test_env();
    let data = write_assessments(&temp_dir);

    get_cmd(&temp_dir)
        .args(["--data", data.to_str().unwrap(), "sq"])
        .assert()
        .success();

    assert_png(&temp_dir.path().join("Fig_sq.png"));

    drop(temp_dir);
}

#[test]
fn test_sds_figure() {
    let (temp_dir, _guard) = setup_test_env();
    let data = write_assessments(&temp_dir);

    get_cmd(&temp_dir)
        .args(["--data", data.to_str().unwrap(), "sds"])
        .assert()
        .success();

    assert_png(&temp_dir.path().join("Fig_sds.png"));

    drop(temp_dir);
}

#[test]
fn test_brums_figure() {
    let (temp_dir, _guard) = setup_test_env();
    let data = write_assessments(&temp_dir);

    get_cmd(&temp_dir)
        .args(["--data", data.to_str().unwrap(), "brums"])
        .assert()
        .success();

    assert_png(&temp_dir.path().join("Fig_brums.png"));

    drop(temp_dir);
}

#[test]
fn test_stai_figure() {
    let (temp_dir, _guard) = setup_test_env();
    let data = write_assessments(&temp_dir);

    get_cmd(&temp_dir)
        .args(["--data", data.to_str().unwrap(), "stai"])
        .assert()
        .success();

    assert_png(&temp_dir.path().join("Fig_stai.png"));

    drop(temp_dir);
}

#[test]
fn test_demo_missing_column_fails() {
    let (temp_dir, _guard) = setup_test_env();
    let path = temp_dir.path().join("assessments.csv");
    fs::write(&path, "age\n23\n31\n").unwrap();

    get_cmd(&temp_dir)
        .args(["--data", path.to_str().unwrap(), "demo"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("Column 'BMI' not found"));

    assert!(!temp_dir.path().join("Fig_demo.png").exists());

    drop(temp_dir);
}

#[test]
fn test_all_renders_everything_and_prints_summaries() {
    let (temp_dir, _guard) = setup_test_env();
    let data = write_assessments(&temp_dir);

    let hyp_dir = temp_dir.path().join("hyps");
    fs::create_dir_all(&hyp_dir).unwrap();
    fs::write(
        hyp_dir.join("P11.hyp"),
        "Epoch,Start,End,Duration,Stage\n1,a,b,30,WK\n2,a,b,30,N1\n3,a,b,30,N2\n",
    )
    .unwrap();

    get_cmd(&temp_dir)
        .args([
            "--data",
            data.to_str().unwrap(),
            "all",
            "--subject",
            "11",
        ])
        .assert()
        .success()
        .stdout(predicates::str::contains("CFQ :  "))
        .stdout(predicates::str::contains("age :  "));

    for fig in [
        "Fig_demo.png",
        "Fig_sq.png",
        "Fig_sds.png",
        "Fig_brums.png",
        "Fig_stai.png",
        "Fig_hyp11.png",
    ] {
        assert_png(&temp_dir.path().join(fig));
    }

    drop(temp_dir);
}

#[test]
fn test_all_without_subject_skips_hypnogram() {
    let (temp_dir, _guard) = setup_test_env();
    let data = write_assessments(&temp_dir);

    get_cmd(&temp_dir)
        .args(["--data", data.to_str().unwrap(), "all"])
        .assert()
        .success();

    assert_png(&temp_dir.path().join("Fig_demo.png"));
    let hyp_figs: Vec<_> = fs::read_dir(temp_dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().starts_with("Fig_hyp"))
        .collect();
    assert!(hyp_figs.is_empty());

    drop(temp_dir);
}
