//! TLDs available before any refresh: the legacy generic TLDs, every
//! country-code TLD and a selection of common newer generic TLDs.

use phf::phf_set;

pub(crate) static BUILTIN_TLDS: phf::Set<&'static str> = phf_set! {
    "ac", "academy", "accountant", "actor", "ad", "ae", "aero", "af", "ag", "agency", "ai",
    "airforce", "al", "am", "amsterdam", "ao", "apartments", "app", "aq", "ar", "archi",
    "army", "arpa", "art", "as", "asia", "associates", "at", "attorney", "au", "auction",
    "audio", "auto", "aw", "ax", "az", "ba", "band", "bar", "barcelona", "bargains", "bb",
    "bd", "be", "beer", "berlin", "best", "bf", "bg", "bh", "bi", "bid", "bike", "bingo",
    "bio", "biz", "bj", "black", "blog", "blue", "bm", "bn", "bo", "boston", "boutique", "br",
    "bs", "bt", "build", "builders", "business", "buzz", "bw", "by", "bz", "ca", "cab", "cafe",
    "camera", "camp", "capital", "car", "cards", "care", "career", "careers", "cars", "casa",
    "cash", "cat", "catering", "cc", "cd", "center", "ceo", "cf", "cg", "ch", "charity",
    "chat", "cheap", "church", "ci", "city", "ck", "cl", "claims", "cleaning", "click",
    "clinic", "clothing", "cloud", "club", "cm", "cn", "co", "coach", "codes", "coffee",
    "college", "com", "community", "company", "computer", "condos", "construction",
    "consulting", "contractors", "cooking", "cool", "coop", "country", "coupons", "courses",
    "cr", "credit", "creditcard", "cricket", "cruises", "cu", "cv", "cw", "cx", "cy", "cymru",
    "cz", "dance", "date", "dating", "de", "deals", "degree", "delivery", "democrat", "dental",
    "dentist", "design", "dev", "diamonds", "diet", "digital", "direct", "directory",
    "discount", "dj", "dk", "dm", "do", "doctor", "dog", "domains", "download", "dz", "earth",
    "ec", "eco", "edu", "education", "ee", "eg", "email", "energy", "engineer", "engineering",
    "enterprises", "equipment", "er", "es", "estate", "et", "eu", "eus", "events", "exchange",
    "expert", "exposed", "express", "fail", "faith", "family", "fan", "fans", "farm",
    "fashion", "fi", "film", "finance", "financial", "fish", "fitness", "fj", "fk", "flights",
    "florist", "fm", "fo", "football", "forsale", "foundation", "fr", "fun", "fund",
    "furniture", "futbol", "fyi", "ga", "gallery", "game", "games", "garden", "gay", "gb",
    "gd", "ge", "gf", "gg", "gh", "gi", "gift", "gifts", "gives", "gl", "glass", "global",
    "gm", "gmbh", "gn", "gold", "golf", "gov", "gp", "gq", "gr", "graphics", "gratis", "green",
    "gripe", "group", "gs", "gt", "gu", "guide", "guitars", "guru", "gw", "gy", "hamburg",
    "haus", "health", "healthcare", "help", "hiphop", "hk", "hm", "hn", "hockey", "holdings",
    "holiday", "horse", "hospital", "host", "hosting", "house", "how", "hr", "ht", "hu", "icu",
    "id", "ie", "il", "im", "immo", "immobilien", "in", "inc", "industries", "info", "ink",
    "institute", "insure", "int", "international", "investments", "io", "iq", "ir", "irish",
    "is", "it", "je", "jetzt", "jewelry", "jm", "jo", "jobs", "jp", "juegos", "kaufen", "ke",
    "kg", "kh", "ki", "kim", "kitchen", "kiwi", "km", "kn", "kp", "kr", "kw", "ky", "kz", "la",
    "land", "lat", "law", "lawyer", "lb", "lc", "lease", "legal", "lgbt", "li", "life",
    "lighting", "limited", "limo", "link", "live", "lk", "llc", "loan", "loans", "lol",
    "london", "love", "lr", "ls", "lt", "ltd", "lu", "luxury", "lv", "ly", "ma", "maison",
    "management", "market", "marketing", "mba", "mc", "md", "me", "media", "memorial", "men",
    "menu", "mg", "mh", "miami", "mil", "mk", "ml", "mm", "mn", "mo", "mobi", "moda", "moe",
    "mom", "money", "monster", "mortgage", "movie", "mp", "mq", "mr", "ms", "mt", "mu",
    "museum", "mv", "mw", "mx", "my", "mz", "na", "nagoya", "name", "navy", "nc", "ne", "net",
    "network", "new", "news", "nf", "ng", "ni", "ninja", "nl", "no", "np", "nr", "nu", "nyc",
    "nz", "okinawa", "om", "one", "online", "ooo", "org", "organic", "pa", "page", "paris",
    "partners", "parts", "party", "pe", "pet", "pf", "pg", "ph", "photo", "photography",
    "photos", "pics", "pictures", "pink", "pizza", "pk", "pl", "place", "plumbing", "plus",
    "pm", "pn", "poker", "porn", "post", "pr", "press", "pro", "productions", "promo",
    "properties", "property", "ps", "pt", "pub", "pw", "py", "qa", "quebec", "racing", "radio",
    "re", "realestate", "recipes", "red", "rehab", "reise", "reisen", "rent", "rentals",
    "repair", "report", "republican", "rest", "restaurant", "review", "reviews", "rich", "rip",
    "ro", "rocks", "rodeo", "rs", "ru", "run", "rw", "sa", "sale", "salon", "sarl", "sb", "sc",
    "school", "schule", "science", "scot", "sd", "se", "security", "services", "sex", "sexy",
    "sg", "sh", "shiksha", "shoes", "shop", "shopping", "show", "si", "singles", "site", "sk",
    "ski", "sl", "sm", "sn", "so", "soccer", "social", "software", "solar", "solutions",
    "space", "sport", "sr", "ss", "st", "store", "stream", "studio", "study", "style", "su",
    "sucks", "supplies", "supply", "support", "surf", "surgery", "sv", "swiss", "sx", "sy",
    "sydney", "systems", "sz", "tax", "taxi", "tc", "td", "team", "tech", "technology", "tel",
    "tennis", "tf", "tg", "th", "theater", "tickets", "tienda", "tips", "tires", "tj", "tk",
    "tl", "tm", "tn", "to", "today", "tokyo", "tools", "top", "tours", "town", "toys", "tr",
    "trade", "trading", "training", "travel", "tt", "tube", "tv", "tw", "tz", "ua", "ug", "uk",
    "university", "uno", "us", "uy", "uz", "va", "vacations", "vc", "ve", "vegas", "ventures",
    "vet", "vg", "vi", "viajes", "video", "villas", "vin", "vip", "vision", "vn", "vodka",
    "vote", "voting", "voto", "voyage", "vu", "wales", "wang", "watch", "webcam", "website",
    "wedding", "wf", "wien", "wiki", "win", "wine", "work", "works", "world", "ws", "wtf",
    "xxx", "xyz", "ye", "yoga", "yt", "za", "zm", "zone", "zw",
};

#[cfg(test)]
mod tests {
    use super::BUILTIN_TLDS;

    #[test]
    fn builtin_entries_are_lowercase_labels() {
        for tld in BUILTIN_TLDS.iter() {
            assert!(!tld.is_empty());
            assert!(
                tld.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-'),
                "{tld}"
            );
        }
    }

    #[test]
    fn builtin_covers_common_tlds() {
        for tld in ["com", "net", "org", "fr", "uk", "io", "dev", "app"] {
            assert!(BUILTIN_TLDS.contains(tld), "{tld}");
        }
        assert!(!BUILTIN_TLDS.contains("zz"));
        assert!(!BUILTIN_TLDS.contains("COM"));
    }
}
