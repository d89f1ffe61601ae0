use rope::Text;

fn sample(n: usize) -> String {
    (0..n).map(|i| char::from(b'a' + (i % 26) as u8)).collect()
}

#[test]
fn round_trip() {
    let t = Text::from("zomg");
    assert_eq!(t.length(), 4);
    assert_eq!(t.to_string(), "zomg");
}

#[test]
fn slice_prefix_and_suffix() {
    let text = sample(2048);
    let rope = Text::from(text.as_str());
    assert_eq!(rope.length(), text.len());

    let left = rope.sub_text(0, 250).unwrap();
    assert_eq!(left.to_string(), &text[..250]);

    let right = rope.sub_text(250, rope.length()).unwrap();
    assert_eq!(right.to_string(), &text[250..]);
}

#[test]
fn concat_two_large_texts() {
    let a = sample(4096);
    let b = sample(4096);

    let left = Text::from(a.as_str());
    let right = Text::from(b.as_str());
    let both = left.concat(&right);

    assert_eq!(both.length(), a.len() + b.len());
    assert_eq!(both.to_string(), format!("{a}{b}"));
}

#[test]
fn equality_holds_regardless_of_how_a_text_was_built() {
    let a = Text::from("Mary had a little lamb, its fleece was white as snow; ")
        .concat(&Text::from("And everywhere that Mary went, the lamb was sure to go."));

    let b = Text::from("Mary had a little lamb, ")
        .concat(&Text::from("its fleece was white as snow; "))
        .concat(
            &Text::from("And everywhere that Mary went, ")
                .concat(&Text::from("the lamb was sure to go.")),
        );

    assert_eq!(a, b);
}

#[test]
fn insert_and_delete_round_trip_through_a_sentence() {
    let mut doc = Text::from("The quick brown fox");
    doc = doc.insert(10, &Text::from("red ")).unwrap();
    assert_eq!(doc.to_string(), "The quick red brown fox");

    let snapshot = doc.clone();
    doc = doc.delete(4, 10).unwrap();
    assert_eq!(doc.to_string(), "The red brown fox");
    assert_eq!(snapshot.to_string(), "The quick red brown fox");
}

#[test]
fn out_of_range_access_is_reported_not_panicked() {
    let t = Text::from("short");
    let err = t.char_at(10).unwrap_err();
    assert_eq!(err.index, 10);
    assert_eq!(err.len, 5);

    assert!(t.sub_text(0, 999).is_err());
    assert!(t.insert(999, &Text::empty()).is_err());
    assert!(t.delete(3, 1).is_err());
}

#[test]
fn empty_text_is_a_valid_operand_everywhere() {
    let empty = Text::empty();
    assert_eq!(empty.length(), 0);
    assert_eq!(empty.to_string(), "");

    let t = Text::from("hello");
    assert_eq!(t.concat(&empty).to_string(), "hello");
    assert_eq!(empty.concat(&t).to_string(), "hello");
    assert_eq!(t.sub_text(2, 2).unwrap().to_string(), "");
    assert_eq!(t.insert(0, &empty).unwrap().to_string(), "hello");
    assert_eq!(t.delete(1, 1).unwrap().to_string(), "hello");
}
