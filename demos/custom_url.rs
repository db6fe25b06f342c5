use urlcanon::{Flags, UrlFields, normalize};

/// An application's own link type, normalized without a string round trip
#[derive(Debug)]
struct Link {
    scheme: String,
    host: String,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl UrlFields for Link {
    fn scheme(&self) -> &str {
        &self.scheme
    }

    fn host(&self) -> &str {
        &self.host
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    fn set_scheme(&mut self, scheme: &str) {
        self.scheme = scheme.to_string();
    }

    fn set_host(&mut self, host: &str) {
        self.host = host.to_string();
    }

    fn set_path(&mut self, path: &str) {
        self.path = path.to_string();
    }

    fn set_query(&mut self, query: Option<&str>) {
        self.query = query.map(str::to_string);
    }

    fn set_fragment(&mut self, fragment: Option<&str>) {
        self.fragment = fragment.map(str::to_string);
    }
}

fn main() {
    let mut link = Link {
        scheme: "HTTPS".to_string(),
        host: "WWW.Example.com:80".to_string(),
        path: "/blog/./2024/../index.html".to_string(),
        query: Some("utm=x&id=7".to_string()),
        fragment: Some("comments".to_string()),
    };

    normalize(&mut link, Flags::UNSAFE);

    println!("Scheme: {}", link.scheme); // http
    println!("Host: {}", link.host); // example.com
    println!("Path: {}", link.path); // /blog/
    println!("Query: {:?}", link.query); // Some("id=7&utm=x")
    println!("Fragment: {:?}", link.fragment); // None
}
