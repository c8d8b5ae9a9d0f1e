use super::DKTName;
use climb_api::climb::DoubleKeySupport;

#[path = "utils.rs"]
mod utils;

//Predictable test hashes: first character for the top level, last character for the sub-tables
fn first_char(key: &str, size: usize) -> usize {
    utils::ord_first(key) % size
}

fn last_char(key: &str, size: usize) -> usize {
    utils::ord_last(key) % size
}

//Table with predictable positions; the top level holds 12 slots, every sub-table 5
fn fixed_table() -> DKTName<&'static str, &'static str, u32> {
    let mut dt: DKTName<&str, &str, u32> = DKTName::with_sizes(Some(&[12]), Some(&[5])).unwrap();
    dt.set_hash1(first_char);
    dt.set_hash2(last_char);
    dt.insert("Tim", "Jen", 1).unwrap();
    dt.insert("Amy", "Ben", 2).unwrap();
    dt.insert("May", "Ben", 3).unwrap();
    dt.insert("Ivy", "Jen", 4).unwrap();
    dt.insert("May", "Tom", 5).unwrap();
    dt.insert("Tim", "Bob", 6).unwrap();
    dt
}

#[test]
fn linear_probe() {
    let mut dt = fixed_table();
    assert!(dt.linear_probe("May", "Jim", false).is_err());
    assert!(dt.linear_probe("Zed", "Jim", false).is_err());
    //Not stored yet, but this is where it would go
    assert_eq!(dt.linear_probe("May", "Jim", true).unwrap(), (6, 1));
    assert_eq!(dt.linear_probe("Het", "Liz", true).unwrap(), (2, 2));

    dt.insert("May", "Jim", 7).unwrap();
    assert_eq!(dt.linear_probe("May", "Jim", false).unwrap(), (6, 1));
    dt.insert("Het", "Liz", 8).unwrap();
    assert_eq!(dt.linear_probe("Het", "Liz", false).unwrap(), (2, 2));
    assert_eq!(dt.linear_probe("Tim", "Bob", false).unwrap(), (0, 3));
}

#[test]
fn keys_and_values() {
    let mut dt = fixed_table();
    dt.insert("May", "Jim", 7).unwrap();
    dt.insert("Het", "Liz", 8).unwrap();
    assert_eq!(dt.len(), 8);

    assert_eq!(dt.keys(), vec![&"Tim", &"Ivy", &"Het", &"Amy", &"May"]);
    assert_eq!(dt.keys_in("May").unwrap(), vec![&"Ben", &"Jim", &"Tom"]);
    assert_eq!(dt.keys_in("Tim").unwrap(), vec![&"Jen", &"Bob"]);
    assert!(dt.keys_in("Bob").is_err());

    assert_eq!(dt.values(), vec![&1, &6, &4, &8, &2, &3, &7, &5]);
    assert_eq!(dt.values_in("May").unwrap(), vec![&3, &7, &5]);
    assert!(dt.values_in("Jen").is_err());

    //The iterators agree with the lists
    assert_eq!(dt.iter_keys().count(), 5);
    assert_eq!(dt.iter_values_in("Tim").unwrap().copied().sum::<u32>(), 7);
}

#[test]
fn get_contains() {
    let dt = fixed_table();
    assert_eq!(*dt.get("Amy", "Ben").unwrap(), 2);
    assert_eq!(*dt.get("May", "Ben").unwrap(), 3);
    assert!(dt.contains("Tim", "Bob"));
    assert!(!dt.contains("Tim", "Tom"));
    assert!(!dt.contains("Bob", "Tim"));
    assert!(dt.get("Ivy", "Bob").is_err());
}

#[test]
fn delete() {
    let mut dt = fixed_table();
    dt.insert("Het", "Liz", 8).unwrap();

    //Not the last pair under "Tim": only the pair goes
    assert_eq!(dt.remove("Tim", "Jen").unwrap(), 1);
    assert_eq!(dt.keys()[0], &"Tim");
    assert!(dt.remove("Tim", "Jen").is_err());

    //Last pair under "Tim": the slot is freed and its cluster moves back
    assert_eq!(dt.remove("Tim", "Bob").unwrap(), 6);
    assert_eq!(dt.linear_probe("Het", "Liz", false).unwrap(), (0, 2));
    assert_eq!(dt.linear_probe("Ivy", "Jen", false).unwrap(), (1, 0));
    assert_eq!(dt.keys(), vec![&"Het", &"Ivy", &"Amy", &"May"]);
    assert_eq!(dt.len(), 5);

    assert!(dt.remove("Tim", "Bob").is_err());
    assert!(dt.remove("May", "Liz").is_err());
    assert_eq!(dt.len(), 5);
}

#[test]
fn resize() {
    let mut dt: DKTName<String, String, usize> = DKTName::with_sizes(None, None).unwrap();
    assert_eq!(dt.table_size(), 5);

    let names = ["Tim", "Amy", "May", "Ivy", "Het", "Ben", "Jen"];
    for (i, n) in names.iter().enumerate() {
        dt.insert(n.to_string(), "x".to_string(), i).unwrap();
        dt.insert(n.to_string(), "y".to_string(), i * 10).unwrap();
    }
    //3 top-level keys grow the table to 13, 7 top-level keys to 29
    assert_eq!(dt.table_size(), 29);
    assert_eq!(dt.len(), 14);
    for (i, n) in names.iter().enumerate() {
        assert_eq!(*dt.get(n, "x").unwrap(), i);
        assert_eq!(*dt.get(n, "y").unwrap(), i * 10);
    }
}

#[test]
fn stops_growing() {
    let mut dt: DKTName<String, &str, u32> = DKTName::with_sizes(Some(&[3]), None).unwrap();
    for k in &["a", "b", "c"] {
        dt.insert(k.to_string(), "v", 0).unwrap();
    }
    assert_eq!(dt.table_size(), 3);
    assert!(dt.insert("d".to_string(), "v", 0).is_err());
    assert_eq!(dt.len(), 3);
}
