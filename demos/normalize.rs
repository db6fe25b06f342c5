use urlcanon::{Flags, normalize_str};

fn main() {
    let input = "HTTPS://www.RooT.com:80/toto/t%45%1f///a/./b/../c/?z=3&w=2&a=4&w=1#invalid";

    // Presets widen from safe to unsafe
    for flags in [Flags::SAFE, Flags::USUALLY_SAFE, Flags::UNSAFE] {
        let normalized = normalize_str(input, flags).expect("Failed to parse URL");
        println!("{flags}: {normalized}");
    }

    // Flag lists can come from configuration text
    let flags: Flags = "usually-safe | sort-query | add-www"
        .parse()
        .expect("Unknown flag name");
    let normalized = normalize_str(input, flags).expect("Failed to parse URL");
    println!("{flags}: {normalized}");
    // usually-safe | add-www | sort-query: https://www.root.com/toto/tE%1F///a/c?a=4&w=1&w=2&z=3
}
