// Example demonstrating the accessor API

use scratchjson::{parse_str, ParseError, ValueType};

fn main() -> Result<(), ParseError> {
    let json = r#"{"name": "value", "numbers": [1, 2.5, -3e2], "flag": true}"#;
    let value = parse_str(json)?;
    println!("Input: {}", json);

    for i in 0..value.get_object_size() {
        let key = String::from_utf8_lossy(value.get_object_key(i));
        let member = value.get_object_value(i);
        match member.get_type() {
            ValueType::String => println!("{key}: string {:?}", member.as_str()),
            ValueType::Array => {
                println!("{key}: array of {}", member.get_array_size());
                for j in 0..member.get_array_size() {
                    println!("  [{j}] = {}", member.get_array_element(j).get_number());
                }
            }
            ValueType::True | ValueType::False => println!("{key}: {}", member.get_boolean()),
            other => println!("{key}: {:?}", other),
        }
    }

    match parse_str("[1 2]") {
        Err(e) => println!("Malformed input rejected: {e}"),
        Ok(v) => println!("Unexpectedly parsed: {v:?}"),
    }
    Ok(())
}
