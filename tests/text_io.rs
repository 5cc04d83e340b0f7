mod util;

use simplex_tree::prelude::*;
use util::{St, random_facets, records, tree_from};

#[test]
fn write_then_read_restores_the_tree() {
    let st = tree_from(&random_facets(7, 12, 20, 4));
    let mut buf = Vec::new();
    TextWriter::default().write(&mut buf, &st).unwrap();
    let back: St = TextReader::default().read(buf.as_slice()).unwrap();
    assert!(back == st);
    assert_eq!(records(&back), records(&st));
}

#[test]
fn writer_emits_filtration_order() {
    let mut st = St::new();
    st.insert_simplex_and_subfaces([1, 0], 0.5);
    st.insert_simplex([2], 0.25);
    let mut buf = Vec::new();
    TextWriter::default().write(&mut buf, &st).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "2 0.25\n0 0.5\n1 0.5\n1 0 0.5\n"
    );
    assert_eq!(st.to_string(), "2 0.25\n0 0.5\n1 0.5\n1 0 0.5\n");
}

#[test]
fn reader_accepts_any_vertex_order() {
    let st: St = "0 0.1\n1 0.1\n0 1 0.2\n".parse().unwrap();
    let e = st.find([1, 0]).unwrap();
    assert_eq!(st.filtration_of(e), 0.2);
    assert_eq!(st.dimension(), Some(1));
    assert_eq!(st.filtration(), 0.2);
}

#[test]
fn duplicate_lines_keep_the_first_value() {
    let st: St = "3 0.4\n3 0.1\n".parse().unwrap();
    assert_eq!(st.num_simplices(), 1);
    assert_eq!(st.filtration_of(st.find([3]).unwrap()), 0.4);
}

#[test]
fn malformed_input_is_an_error() {
    let cases = [
        ("0 0.1\n1 x\n", 2),
        ("0 0.1\n\n-3 0.2\n", 3),
        ("0.5\n", 1),
        ("# only comments\n1 2 abc\n", 2),
    ];
    for (input, line) in cases {
        match input.parse::<St>() {
            Err(SimplexTreeError::Parse { line: got, .. }) => {
                assert_eq!(got, line, "input {input:?}")
            }
            other => panic!("input {input:?}: expected a parse error, got {other:?}"),
        }
    }
}

#[test]
fn io_errors_are_reported() {
    struct Broken;
    impl std::io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk full"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
    let mut st = St::new();
    st.insert_simplex([0], 0.0);
    let err = TextWriter::default().write(Broken, &st).unwrap_err();
    assert!(matches!(err, SimplexTreeError::Io(ref m) if m.contains("disk full")));
}
