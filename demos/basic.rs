use urlsplit::UrlObject;

fn main() {
    // Split an address with a custom transport scheme
    let url = UrlObject::parse("rest://user:pw@127.0.0.1:5000/abc?x=1#sec");

    println!("Href: {}", url.href()); // rest://user:pw@127.0.0.1:5000/abc?x=1#sec
    println!("Protocol: {:?}", url.protocol()); // Some("rest:")
    println!("Auth: {:?}", url.auth()); // Some("user:pw")
    println!("Hostname: {:?}", url.hostname()); // Some("127.0.0.1:5000")
    println!("Host: {:?}", url.host()); // Some("127.0.0.1")
    println!("Port: {:?}", url.port()); // Some("5000")
    println!("Path: {}", url.path()); // /abc?x=1#sec
    println!("Pathname: {}", url.pathname()); // /abc
    println!("Search: {}", url.search()); // ?x=1
    println!("Query: {}", url.query()); // x=1
    println!("Hash: {:?}", url.hash()); // Some("#sec")
    println!();

    // Scheme-less input: the whole text is a path candidate
    let url = UrlObject::parse("/just/a/path?x=1");
    println!("Protocol: {:?}", url.protocol()); // None
    println!("Pathname: {}", url.pathname()); // /just/a/path
    println!("Query: {}", url.query()); // x=1
}
