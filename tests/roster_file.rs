//! End-to-end behaviour of a roster persisted to disk.

use std::fs;

use roster::{LoadError, ParseError, Roster, RosterEntry, storage::delimited};
use tempfile::TempDir;

fn entry(id: u64, name: &str, email: &str, group: &str) -> RosterEntry {
    RosterEntry::new(id, name.to_string(), email.to_string(), group.to_string()).unwrap()
}

#[test]
fn sort_filter_and_persist() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("data.csv");

    let mut roster = Roster::new();
    roster.add(entry(3, "Вера Петрова", "vera@uni.ru", "ИУ5-31"));
    roster.add(entry(1, "Анна Иванова", "anna@uni.ru", "ИУ5-32"));
    roster.add(entry(2, "Борис Смирнов", "boris@uni.ru", "ИУ5-31"));
    roster.save_to_file(&path).unwrap();

    let mut loaded = Roster::new();
    loaded.load_from_file(&path).unwrap();
    assert_eq!(loaded, roster);

    loaded.sort_by_name();
    let names: Vec<_> = loaded.iter().map(RosterEntry::name).collect();
    assert_eq!(names, ["Анна Иванова", "Борис Смирнов", "Вера Петрова"]);

    let group: Vec<_> = loaded
        .filter_by_group("ИУ5-31")
        .map(RosterEntry::id)
        .collect();
    assert_eq!(group, [2, 3]);

    loaded.add(entry(4, "Глеб Орлов", "gleb@uni.ru", "ИУ5-31"));
    loaded.sort_by_id();
    loaded.save_to_file(&path).unwrap();

    let mut reloaded = Roster::new();
    reloaded.load_from_file(&path).unwrap();
    assert_eq!(reloaded.len(), 4);
    assert_eq!(reloaded.filter_by_group("ИУ5-31").count(), 3);
    assert_eq!(
        reloaded[3].to_string(),
        "Student(id=4, name='Глеб Орлов', group='ИУ5-31')"
    );
}

#[test]
fn file_written_by_a_spreadsheet_tool_loads() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("export.csv");
    fs::write(
        &path,
        "\u{feff}№,ФИО,email,группа\r\n7,\"Ivanov, Ivan\",ivan@x.com,G1\r\n",
    )
    .unwrap();

    let mut roster = Roster::new();
    roster.load_from_file(&path).unwrap();
    assert_eq!(roster.entries(), [entry(7, "Ivanov, Ivan", "ivan@x.com", "G1")]);
}

#[test]
fn header_without_group_column_fails_to_load() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("data.csv");
    fs::write(&path, "№,ФИО,email\n1,Anna,a@x.com\n").unwrap();

    let mut roster = Roster::new();
    let error = roster.load_from_file(&path).unwrap_err();
    assert!(matches!(
        error,
        LoadError::Parse(ParseError::MissingColumn(roster::Field::Group))
    ));
    assert!(roster.is_empty());
}

#[test]
fn nonexistent_file_fails_to_load() {
    let tmp = TempDir::new().unwrap();
    let mut roster = Roster::new();
    let error = roster
        .load_from_file(&tmp.path().join("nope.csv"))
        .unwrap_err();
    assert!(matches!(error, LoadError::NotFound(_)));
    assert!(error.to_string().starts_with("file not found: "));
}

#[test]
fn counts_only_regular_files() {
    let tmp = TempDir::new().unwrap();
    for name in ["one.txt", "two.txt", "three.txt"] {
        fs::write(tmp.path().join(name), "x").unwrap();
    }
    fs::create_dir(tmp.path().join("nested")).unwrap();

    assert_eq!(Roster::count_files_in_directory(tmp.path()).unwrap(), 3);
}

#[test]
fn written_output_matches_saved_file_without_bom() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("data.csv");
    let config = roster::Config {
        write_bom: false,
        ..roster::Config::default()
    };

    let roster: Roster = [entry(1, "Anna", "a@x.com", "G1")].into_iter().collect();
    roster.save_to_file_with(&path, &config).unwrap();

    let mut expected = Vec::new();
    delimited::write(&roster, &mut expected).unwrap();
    assert_eq!(fs::read(&path).unwrap(), expected);
}
