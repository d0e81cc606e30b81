/// `QueryString` usage example
use urlsplit::{QueryString, UrlObject};

fn main() {
    // Split an address, then decompose its query field
    let url = UrlObject::parse("rest://host/search?term=cats&limit=10&tag=a&tag=b");
    let params = QueryString::parse(url.query());

    // Get values
    println!("term: {:?}", params.get("term")); // Some("cats")
    println!("limit: {:?}", params.get("limit")); // Some("10")
    println!();

    // Duplicate keys keep every value
    println!("tag: {:?}", params.get_all("tag")); // ["a", "b"]
    println!();

    // Iterate over all parameters
    println!("All parameters:");
    for (key, value) in params.iter() {
        println!("  {key} = {value}");
    }
}
