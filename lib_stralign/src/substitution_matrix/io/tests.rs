use crate::{
    error::Error,
    substitution_matrix::{SubstitutionKey, SubstitutionMatrix},
};

#[test]
fn simple_example() {
    let input = "AA 0\nAC -1\n\nCC\t2.5\n   -2\n A -inf\n";
    let (remaining_input, entries) = SubstitutionMatrix::<f32>::parse_plain(input).unwrap();
    assert_eq!(remaining_input, "");
    assert_eq!(
        entries,
        vec![
            (SubstitutionKey::new('A', 'A'), 0.0),
            (SubstitutionKey::new('A', 'C'), -1.0),
            (SubstitutionKey::new('C', 'C'), 2.5),
            (SubstitutionKey::new(' ', ' '), -2.0),
            (SubstitutionKey::new(' ', 'A'), f32::NEG_INFINITY),
        ]
    );

    let matrix = SubstitutionMatrix::from_entries(entries).unwrap();
    assert_eq!(matrix.score('A', ' ').unwrap(), f32::NEG_INFINITY);

    let mut writer = Vec::new();
    matrix.write_plain(&mut writer).unwrap();
    let output = String::from_utf8(writer).unwrap();
    assert_eq!(output, "   -2\n A -inf\nAA 0\nAC -1\nCC 2.5\n");
}

#[test]
fn missing_score() {
    assert!(SubstitutionMatrix::<f32>::parse_plain("AB\n").is_err());
    assert!(SubstitutionMatrix::<f32>::parse_plain("ABC 1\n").is_err());
    assert!(SubstitutionMatrix::<f32>::parse_plain("AB 1 2\n").is_err());
}

#[test]
fn duplicate_entry() {
    let (_, entries) = SubstitutionMatrix::<f64>::parse_plain("ab 1\nab 2").unwrap();
    assert!(matches!(
        SubstitutionMatrix::from_entries(entries),
        Err(Error::DuplicateSubstitutionKey(_))
    ));
}

#[test]
fn whitespace_only_lines() {
    let (remaining_input, entries) =
        SubstitutionMatrix::<f32>::parse_plain("AA 0\n   \nAC -1\n\t\r\nCC 1\n  ").unwrap();
    assert_eq!(remaining_input, "");
    assert_eq!(
        entries,
        vec![
            (SubstitutionKey::new('A', 'A'), 0.0),
            (SubstitutionKey::new('A', 'C'), -1.0),
            (SubstitutionKey::new('C', 'C'), 1.0),
        ]
    );
}
