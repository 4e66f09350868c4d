/// Known device brands: (two-letter code, brand name).
pub(crate) const BRANDS: &[(&str, &str)] = &[
    ("3Q", "3Q"),
    ("4G", "4Good"),
    ("AA", "AllCall"),
    ("AC", "Acer"),
    ("AD", "Advan"),
    ("AI", "Airness"),
    ("AL", "Alcatel"),
    ("AM", "Allview"),
    ("AN", "Arnova"),
    ("AO", "Amoi"),
    ("AP", "Apple"),
    ("AR", "Archos"),
    ("AS", "ARRIS"),
    ("AT", "Airties"),
    ("AU", "Asus"),
    ("AV", "Avvio"),
    ("AX", "Audiovox"),
    ("AZ", "Ainol"),
    ("BB", "BBK"),
    ("BE", "Becker"),
    ("BI", "Bird"),
    ("BL", "Beetel"),
    ("BN", "Barnes & Noble"),
    ("BQ", "BenQ"),
    ("BS", "BenQ-Siemens"),
    ("BX", "bq"),
    ("CA", "Cat"),
    ("CK", "Cricket"),
    ("CL", "Compal"),
    ("CN", "CnM"),
    ("CO", "Coolpad"),
    ("CP", "Captiva"),
    ("CR", "CreNova"),
    ("CS", "Casio"),
    ("CT", "Capitel"),
    ("CU", "Cube"),
    ("CW", "Cowon"),
    ("CX", "Cherry Mobile"),
    ("CY", "Coby Kyros"),
    ("DE", "Denver"),
    ("DI", "Dicam"),
    ("DL", "Dell"),
    ("DM", "DMM"),
    ("DO", "Doogee"),
    ("DP", "Dopod"),
    ("EB", "E-Boda"),
    ("EL", "Elephone"),
    ("EP", "Easypix"),
    ("ER", "Ericy"),
    ("ES", "ECS"),
    ("EZ", "Ezze"),
    ("FL", "Fly"),
    ("FU", "Fujitsu"),
    ("GI", "Gionee"),
    ("GM", "Garmin-Asus"),
    ("GO", "Google"),
    ("GR", "Gradiente"),
    ("GU", "Grundig"),
    ("HA", "Haier"),
    ("HI", "Hisense"),
    ("HP", "HP"),
    ("HT", "HTC"),
    ("HU", "Huawei"),
    ("HX", "Humax"),
    ("IA", "Ikea"),
    ("IB", "iBall"),
    ("IK", "iKoMo"),
    ("IN", "Innostream"),
    ("IO", "i-mate"),
    ("IT", "Intex"),
    ("JI", "Jiayu"),
    ("KA", "Karbonn"),
    ("KD", "KDDI"),
    ("KN", "Kindle"),
    ("KO", "Konka"),
    ("KT", "K-Touch"),
    ("KY", "Kyocera"),
    ("LA", "Lanix"),
    ("LE", "Lenovo"),
    ("LG", "LG"),
    ("LO", "Loewe"),
    ("LU", "LGUPlus"),
    ("LV", "Lava"),
    ("MB", "Mobistel"),
    ("MD", "Medion"),
    ("ME", "Metz"),
    ("MI", "MicroMax"),
    ("MO", "Mio"),
    ("MR", "Motorola"),
    ("MS", "Microsoft"),
    ("MT", "Mitsubishi"),
    ("MU", "Meizu"),
    ("MW", "MyWigo"),
    ("MX", "MIXC"),
    ("MZ", "MTN"),
    ("NE", "NEC"),
    ("NG", "NGM"),
    ("NI", "Nintendo"),
    ("NK", "Nokia"),
    ("NN", "Nikon"),
    ("NO", "Nous"),
    ("NV", "Nvidia"),
    ("NX", "Nexian"),
    ("OD", "Onda"),
    ("ON", "OnePlus"),
    ("OP", "OPPO"),
    ("OR", "Orange"),
    ("OU", "OUYA"),
    ("PA", "Panasonic"),
    ("PE", "PEAQ"),
    ("PH", "Philips"),
    ("PI", "Pioneer"),
    ("PL", "Polaroid"),
    ("PO", "phoneOne"),
    ("PP", "PolyPad"),
    ("PR", "Prestigio"),
    ("PT", "Pantech"),
    ("QI", "Qilive"),
    ("QT", "Qtek"),
    ("RM", "RIM"),
    ("RO", "Rover"),
    ("SA", "Samsung"),
    ("SD", "Sega"),
    ("SE", "Sony Ericsson"),
    ("SF", "Softbank"),
    ("SG", "Sagem"),
    ("SH", "Sharp"),
    ("SI", "Siemens"),
    ("SK", "Skyworth"),
    ("SN", "Sendo"),
    ("SO", "Sony"),
    ("SP", "Spice"),
    ("SU", "SuperSonic"),
    ("SV", "Selevision"),
    ("SX", "SANYO"),
    ("SY", "Symphony"),
    ("TA", "Tesla"),
    ("TB", "Teslas"),
    ("TC", "TCL"),
    ("TE", "Telit"),
    ("TH", "TiPhone"),
    ("TI", "TIANYU"),
    ("TL", "Telefunken"),
    ("TM", "T-Mobile"),
    ("TN", "Thomson"),
    ("TO", "Tolino"),
    ("TQ", "Tecno Mobile"),
    ("TS", "Toshiba"),
    ("TT", "TechnoTrend"),
    ("TX", "TechniSat"),
    ("UT", "UTStarcom"),
    ("VD", "Videocon"),
    ("VE", "Vertu"),
    ("VI", "Vitelcom"),
    ("VK", "VK Mobile"),
    ("VO", "Voxtel"),
    ("VT", "Vestel"),
    ("VV", "Vivo"),
    ("VX", "Vertex"),
    ("WB", "Web TV"),
    ("WE", "WellcoM"),
    ("WI", "Wiko"),
    ("WO", "Wonu"),
    ("WX", "Woxter"),
    ("XI", "Xiaomi"),
    ("XX", "Unknown"),
    ("YU", "Yuandao"),
    ("ZO", "Zonda"),
    ("ZP", "Zopo"),
    ("ZT", "ZTE"),
];
