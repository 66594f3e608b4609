// 15 lines 9 code 4 comments 2 blanks
use std::collections::HashMap;

/* block comment
   spanning lines */
fn main() {
    let url = "http://example.com"; // comment after code
    let raw = r#"not a /* comment */ "#;
    /* nested /* comment */ still comment */
    let mut counts: HashMap<&str, usize> = HashMap::new();
    counts.insert("a", 1); /* trailing */

    let s = "escaped \" quote // still string";
    println!("{} {} {} {:?}", url, raw, s, counts);
}
