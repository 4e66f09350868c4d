/// Known browsers: (short code, canonical name).
pub(crate) const BROWSERS: &[(&str, &str)] = &[
    ("36", "360 Phone Browser"),
    ("3B", "360 Browser"),
    ("AA", "Avant Browser"),
    ("AB", "ABrowse"),
    ("AN", "Android Browser"),
    ("AO", "Amigo"),
    ("AR", "Arora"),
    ("BB", "BlackBerry Browser"),
    ("BD", "Baidu Browser"),
    ("BP", "Blue Browser"),
    ("BR", "Brave"),
    ("CA", "Camino"),
    ("CC", "Coc Coc"),
    ("CD", "Comodo Dragon"),
    ("CF", "Chrome Frame"),
    ("CH", "Chrome"),
    ("CI", "Chrome Mobile iOS"),
    ("CM", "Chrome Mobile"),
    ("CN", "CoolNovo"),
    ("CP", "ChromePlus"),
    ("CR", "Chromium"),
    ("CV", "Chrome Webview"),
    ("DB", "dbrowser"),
    ("DF", "Dolphin"),
    ("EP", "GNOME Web"),
    ("ES", "Espial TV Browser"),
    ("FE", "Fennec"),
    ("FF", "Firefox"),
    ("FM", "Firefox Mobile"),
    ("HC", "Headless Chrome"),
    ("IE", "Internet Explorer"),
    ("IM", "IE Mobile"),
    ("IR", "Iron"),
    ("KO", "Konqueror"),
    ("KY", "Kylo"),
    ("LX", "Lynx"),
    ("MF", "Mobile Safari"),
    ("MX", "Maxthon"),
    ("NF", "NetFront"),
    ("OI", "Opera Mini"),
    ("OM", "Opera Mobile"),
    ("ON", "Opera Next"),
    ("OP", "Opera"),
    ("PS", "Microsoft Edge"),
    ("PU", "Puffin"),
    ("SB", "Samsung Browser"),
    ("SF", "Safari"),
    ("SK", "Skyfire"),
    ("SM", "SeaMonkey"),
    ("ST", "Streamy"),
    ("UC", "UC Browser"),
    ("VI", "Vivaldi"),
    ("YA", "Yandex Browser"),
];

/// Browser families: (family, member short codes).
pub(crate) const BROWSER_FAMILIES: &[(&str, &[&str])] = &[
    ("Android Browser", &["AN"]),
    ("BlackBerry Browser", &["BB"]),
    ("Baidu", &["BD"]),
    ("Amiga", &[]),
    (
        "Chrome",
        &[
            "CH", "BR", "CC", "CD", "CM", "CI", "CF", "CN", "CR", "CP", "CV", "IR", "AO", "VI",
            "SB", "HC", "YA",
        ],
    ),
    ("Firefox", &["FF", "FE", "FM", "SM"]),
    ("Internet Explorer", &["IE", "IM", "PS"]),
    ("Konqueror", &["KO"]),
    ("NetFront", &["NF"]),
    ("Nokia Browser", &[]),
    ("Opera", &["OP", "OM", "OI", "ON"]),
    ("Safari", &["SF", "MF"]),
    ("Sailfish Browser", &[]),
];

/// Browsers that only ship on mobile devices.
pub(crate) const MOBILE_ONLY_BROWSERS: &[&str] = &["36", "PU", "SK", "MF", "OI", "OM", "DB", "ST", "BP"];
