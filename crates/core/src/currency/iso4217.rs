//! ISO 4217 catalog data.
//!
//! Active, historical and special codes with their numeric code, name,
//! display symbol, minor units and the countries using them.

/// Static description of one catalog entry.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CurrencyDef {
    pub(crate) code: &'static str,
    pub(crate) numeric: &'static str,
    pub(crate) name: &'static str,
    pub(crate) symbol: &'static str,
    pub(crate) decimals: u32,
    pub(crate) countries: &'static [&'static str],
}

const fn def(
    code: &'static str,
    numeric: &'static str,
    name: &'static str,
    symbol: &'static str,
    decimals: u32,
    countries: &'static [&'static str],
) -> CurrencyDef {
    CurrencyDef {
        code,
        numeric,
        name,
        symbol,
        decimals,
        countries,
    }
}

/// Sentinel for "no currency specified".
pub(crate) const NO_CURRENCY: &str = "XXX";

#[rustfmt::skip]
pub(crate) const CURRENCIES: &[CurrencyDef] = &[
    def("AED", "784", "UAE Dirham", "", 2, &["UNITED ARAB EMIRATES"]),
    def("AFN", "971", "Afghani", "", 2, &["AFGHANISTAN"]),
    def("ALL", "008", "Lek", "", 2, &["ALBANIA"]),
    def("AMD", "051", "Armenian Dram", "", 2, &["ARMENIA"]),
    def("ANG", "532", "Netherlands Antillian Guilder", "", 2, &["NETHERLANDS ANTILLES"]),
    def("AOA", "973", "Kwanza", "", 2, &["ANGOLA"]),
    def("ARS", "032", "Argentine Peso", "", 2, &["ARGENTINA"]),
    def("AUD", "036", "Australian Dollar", "$", 2, &["AUSTRALIA", "CHRISTMAS ISLAND", "COCOS (KEELING) ISLANDS", "HEARD ISLAND AND MCDONALD ISLANDS", "KIRIBATI", "NAURU", "NORFOLK ISLAND", "TUVALU"]),
    def("AWG", "533", "Aruban Guilder", "", 2, &["ARUBA"]),
    def("AZN", "944", "Azerbaijanian Manat", "", 2, &["AZERBAIJAN"]),
    def("BAM", "977", "Convertible Marks", "", 2, &["BOSNIA AND HERZEGOVINA"]),
    def("BBD", "052", "Barbados Dollar", "", 2, &["BARBADOS"]),
    def("BDT", "050", "Taka", "", 2, &["BANGLADESH"]),
    def("BGN", "975", "Bulgarian Lev", "", 2, &["BULGARIA"]),
    def("BHD", "048", "Bahraini Dinar", "", 3, &["BAHRAIN"]),
    def("BIF", "108", "Burundi Franc", "", 0, &["BURUNDI"]),
    def("BMD", "060", "Bermudian Dollar", "", 2, &["BERMUDA"]),
    def("BND", "096", "Brunei Dollar", "", 2, &["BRUNEI DARUSSALAM"]),
    def("BRL", "986", "Brazilian Real", "", 2, &["BRAZIL"]),
    def("BSD", "044", "Bahamian Dollar", "", 2, &["BAHAMAS"]),
    def("BWP", "072", "Pula", "", 2, &["BOTSWANA"]),
    def("BYR", "974", "Belarussian Ruble", "", 2, &["BELARUS"]),
    def("BZD", "084", "Belize Dollar", "", 2, &["BELIZE"]),
    def("CAD", "124", "Canadian Dollar", "$", 2, &["CANADA"]),
    def("CHF", "756", "Swiss Franc", "Fr.", 2, &["LIECHTENSTEIN"]),
    def("CNY", "156", "Yuan Renminbi", "", 2, &["CHINA"]),
    def("CRC", "188", "Costa Rican Colon", "", 2, &["COSTA RICA"]),
    def("CUP", "192", "Cuban Peso", "", 2, &["CUBA"]),
    def("CVE", "132", "Cape Verde Escudo", "", 2, &["CAPE VERDE"]),
    def("CZK", "203", "Czech Koruna", "", 2, &["CZECH REPUBLIC"]),
    def("DJF", "262", "Djibouti Franc", "", 0, &["DJIBOUTI"]),
    def("DKK", "208", "Danish Krone", "", 2, &["DENMARK", "FAROE ISLANDS", "GREENLAND"]),
    def("DOP", "214", "Dominican Peso", "", 2, &["DOMINICAN REPUBLIC"]),
    def("DZD", "012", "Algerian Dinar", "", 2, &["ALGERIA"]),
    def("EEK", "233", "Kroon", "", 2, &["ESTONIA"]),
    def("EGP", "818", "Egyptian Pound", "", 2, &["EGYPT"]),
    def("ERN", "232", "Nakfa", "", 2, &["ERITREA"]),
    def("ETB", "230", "Ethiopian Birr", "", 2, &["ETHIOPIA"]),
    def("EUR", "978", "Euro", "€", 2, &["ANDORRA", "AUSTRIA", "BELGIUM", "FINLAND", "FRANCE", "FRENCH GUIANA", "FRENCH SOUTHERN TERRITORIES", "GERMANY", "GREECE", "GUADELOUPE", "IRELAND", "ITALY", "LUXEMBOURG", "MARTINIQUE", "MAYOTTE", "MONACO", "MONTENEGRO", "NETHERLANDS", "PORTUGAL", "R.UNION", "SAINT PIERRE AND MIQUELON", "SAN MARINO", "SLOVENIA", "SPAIN"]),
    def("FJD", "242", "Fiji Dollar", "", 2, &["FIJI"]),
    def("FKP", "238", "Falkland Islands Pound", "", 2, &["FALKLAND ISLANDS (MALVINAS)"]),
    def("GBP", "826", "Pound Sterling", "£", 2, &["UNITED KINGDOM"]),
    def("GEL", "981", "Lari", "", 2, &["GEORGIA"]),
    def("GHS", "936", "Ghana Cedi", "", 2, &["GHANA"]),
    def("GIP", "292", "Gibraltar Pound", "", 2, &["GIBRALTAR"]),
    def("GMD", "270", "Dalasi", "", 2, &["GAMBIA"]),
    def("GNF", "324", "Guinea Franc", "", 0, &["GUINEA"]),
    def("GTQ", "320", "Quetzal", "", 2, &["GUATEMALA"]),
    def("GYD", "328", "Guyana Dollar", "", 2, &["GUYANA"]),
    def("HKD", "344", "Hong Kong Dollar", "", 2, &["HONG KONG"]),
    def("HNL", "340", "Lempira", "", 2, &["HONDURAS"]),
    def("HRK", "191", "Croatian Kuna", "", 2, &["CROATIA"]),
    def("HUF", "348", "Forint", "", 2, &["HUNGARY"]),
    def("IDR", "360", "Rupiah", "", 2, &["INDONESIA"]),
    def("ILS", "376", "New Israeli Sheqel", "", 2, &["ISRAEL"]),
    def("INR", "356", "Indian Rupee", "", 2, &["INDIA"]),
    def("IQD", "368", "Iraqi Dinar", "", 3, &["IRAQ"]),
    def("IRR", "364", "Iranian Rial", "", 2, &["IRAN"]),
    def("ISK", "352", "Iceland Krona", "", 0, &["ICELAND"]),
    def("JMD", "388", "Jamaican Dollar", "", 2, &["JAMAICA"]),
    def("JOD", "400", "Jordanian Dinar", "", 3, &["JORDAN"]),
    def("JPY", "392", "Yen", "¥", 0, &["JAPAN"]),
    def("KES", "404", "Kenyan Shilling", "", 2, &["KENYA"]),
    def("KGS", "417", "Som", "", 2, &["KYRGYZSTAN"]),
    def("KHR", "116", "Riel", "", 2, &["CAMBODIA"]),
    def("KMF", "174", "Comoro Franc", "", 0, &["COMOROS"]),
    def("KPW", "408", "North Korean Won", "", 2, &["KOREA"]),
    def("KRW", "410", "Won", "", 0, &["KOREA"]),
    def("KWD", "414", "Kuwaiti Dinar", "", 3, &["KUWAIT"]),
    def("KYD", "136", "Cayman Islands Dollar", "", 2, &["CAYMAN ISLANDS"]),
    def("KZT", "398", "Tenge", "", 2, &["KAZAKHSTAN"]),
    def("LAK", "418", "Kip", "", 2, &["LAO PEOPLES DEMOCRATIC REPUBLIC"]),
    def("LBP", "422", "Lebanese Pound", "", 2, &["LEBANON"]),
    def("LKR", "144", "Sri Lanka Rupee", "", 2, &["SRI LANKA"]),
    def("LRD", "430", "Liberian Dollar", "", 2, &["LIBERIA"]),
    def("LTL", "440", "Lithuanian Litas", "", 2, &["LITHUANIA"]),
    def("LVL", "428", "Latvian Lats", "", 2, &["LATVIA"]),
    def("LYD", "434", "Libyan Dinar", "", 3, &["LIBYAN ARAB JAMAHIRIYA"]),
    def("MAD", "504", "Moroccan Dirham", "", 2, &["MOROCCO", "WESTERN SAHARA"]),
    def("MDL", "498", "Moldovan Leu", "", 2, &["MOLDOVA"]),
    def("MGA", "969", "Malagasy Ariary", "", 2, &["MADAGASCAR"]),
    def("MKD", "807", "Denar", "", 2, &["MACEDONIA"]),
    def("MMK", "104", "Kyat", "", 2, &["MYANMAR"]),
    def("MNT", "496", "Tugrik", "", 2, &["MONGOLIA"]),
    def("MOP", "446", "Pataca", "", 2, &["MACAO"]),
    def("MRO", "478", "Ouguiya", "", 2, &["MAURITANIA"]),
    def("MUR", "480", "Mauritius Rupee", "", 2, &["MAURITIUS"]),
    def("MVR", "462", "Rufiyaa", "", 2, &["MALDIVES"]),
    def("MWK", "454", "Kwacha", "", 2, &["MALAWI"]),
    def("MYR", "458", "Malaysian Ringgit", "", 2, &["MALAYSIA"]),
    def("MZN", "943", "Metical", "", 2, &["MOZAMBIQUE"]),
    def("NGN", "566", "Naira", "", 2, &["NIGERIA"]),
    def("NIO", "558", "Cordoba Oro", "", 2, &["NICARAGUA"]),
    def("NOK", "578", "Norwegian Krone", "", 2, &["BOUVET ISLAND", "NORWAY", "SVALBARD AND JAN MAYEN"]),
    def("NPR", "524", "Nepalese Rupee", "", 2, &["NEPAL"]),
    def("NZD", "554", "New Zealand Dollar", "", 2, &["COOK ISLANDS", "NEW ZEALAND", "NIUE", "PITCAIRN", "TOKELAU"]),
    def("OMR", "512", "Rial Omani", "", 3, &["OMAN"]),
    def("PEN", "604", "Nuevo Sol", "", 2, &["PERU"]),
    def("PGK", "598", "Kina", "", 2, &["PAPUA NEW GUINEA"]),
    def("PHP", "608", "Philippine Peso", "", 2, &["PHILIPPINES"]),
    def("PKR", "586", "Pakistan Rupee", "", 2, &["PAKISTAN"]),
    def("PLN", "985", "Zloty", "", 2, &["POLAND"]),
    def("PYG", "600", "Guarani", "", 0, &["PARAGUAY"]),
    def("QAR", "634", "Qatari Rial", "", 2, &["QATAR"]),
    def("RON", "946", "New Leu", "", 2, &["ROMANIA"]),
    def("RSD", "941", "Serbian Dinar", "", 2, &["SERBIA"]),
    def("RUB", "643", "Russian Ruble", "руб", 2, &["RUSSIAN FEDERATION"]),
    def("RWF", "646", "Rwanda Franc", "", 0, &["RWANDA"]),
    def("SAR", "682", "Saudi Riyal", "", 2, &["SAUDI ARABIA"]),
    def("SBD", "090", "Solomon Islands Dollar", "", 2, &["SOLOMON ISLANDS"]),
    def("SCR", "690", "Seychelles Rupee", "", 2, &["SEYCHELLES"]),
    def("SDG", "938", "Sudanese Pound", "", 2, &["SUDAN"]),
    def("SEK", "752", "Swedish Krona", "", 2, &["SWEDEN"]),
    def("SGD", "702", "Singapore Dollar", "", 2, &["SINGAPORE"]),
    def("SHP", "654", "Saint Helena Pound", "", 2, &["SAINT HELENA"]),
    def("SKK", "703", "Slovak Koruna", "", 2, &["SLOVAKIA"]),
    def("SLL", "694", "Leone", "", 2, &["SIERRA LEONE"]),
    def("SOS", "706", "Somali Shilling", "", 2, &["SOMALIA"]),
    def("SRD", "968", "Surinam Dollar", "", 2, &["SURINAME"]),
    def("STD", "678", "Dobra", "", 2, &["SAO TOME AND PRINCIPE"]),
    def("SYP", "760", "Syrian Pound", "", 2, &["SYRIAN ARAB REPUBLIC"]),
    def("SZL", "748", "Lilangeni", "", 2, &["SWAZILAND"]),
    def("THB", "764", "Baht", "", 2, &["THAILAND"]),
    def("TJS", "972", "Somoni", "", 2, &["TAJIKISTAN"]),
    def("TMM", "795", "Manat", "", 2, &["TURKMENISTAN"]),
    def("TND", "788", "Tunisian Dinar", "", 3, &["TUNISIA"]),
    def("TOP", "776", "Paanga", "", 2, &["TONGA"]),
    def("TRY", "949", "New Turkish Lira", "", 2, &["TURKEY"]),
    def("TTD", "780", "Trinidad and Tobago Dollar", "", 2, &["TRINIDAD AND TOBAGO"]),
    def("TWD", "901", "New Taiwan Dollar", "", 2, &["TAIWAN"]),
    def("TZS", "834", "Tanzanian Shilling", "", 2, &["TANZANIA"]),
    def("UAH", "980", "Hryvnia", "", 2, &["UKRAINE"]),
    def("UGX", "800", "Uganda Shilling", "", 0, &["UGANDA"]),
    def("USD", "840", "US Dollar", "$", 2, &["AMERICAN SAMOA", "BRITISH INDIAN OCEAN TERRITORY", "ECUADOR", "GUAM", "MARSHALL ISLANDS", "MICRONESIA", "NORTHERN MARIANA ISLANDS", "PALAU", "PUERTO RICO", "TIMOR-LESTE", "TURKS AND CAICOS ISLANDS", "UNITED STATES MINOR OUTLYING ISLANDS", "VIRGIN ISLANDS (BRITISH)", "VIRGIN ISLANDS (U.S.)"]),
    def("UZS", "860", "Uzbekistan Sum", "", 2, &["UZBEKISTAN"]),
    def("VEF", "937", "Bolivar Fuerte", "", 2, &["VENEZUELA"]),
    def("VND", "704", "Dong", "", 0, &["VIET NAM"]),
    def("VUV", "548", "Vatu", "", 0, &["VANUATU"]),
    def("WST", "882", "Tala", "", 2, &["SAMOA"]),
    def("XAG", "961", "Silver", "", 0, &[]),
    def("XAU", "959", "Gold", "", 0, &[]),
    def("XBA", "955", "Bond Markets Units European Composite Unit (EURCO)", "", 0, &[]),
    def("XBB", "956", "European Monetary Unit (E.M.U.-6)", "", 0, &[]),
    def("XBC", "957", "European Unit of Account 9(E.U.A.-9)", "", 0, &[]),
    def("XBD", "958", "European Unit of Account 17(E.U.A.-17)", "", 0, &[]),
    def("XCD", "951", "East Caribbean Dollar", "", 2, &["ANGUILLA", "ANTIGUA AND BARBUDA", "DOMINICA", "GRENADA", "MONTSERRAT", "SAINT KITTS AND NEVIS", "SAINT LUCIA", "SAINT VINCENT AND THE GRENADINES"]),
    def("XDR", "960", "SDR", "", 0, &["INTERNATIONAL MONETARY FUND (I.M.F)"]),
    def("XFO", "Nil", "Gold-Franc", "", 0, &[]),
    def("XFU", "Nil", "UIC-Franc", "", 0, &[]),
    def("XPD", "964", "Palladium", "", 0, &[]),
    def("XPF", "953", "CFP Franc", "", 0, &["FRENCH POLYNESIA", "NEW CALEDONIA", "WALLIS AND FUTUNA"]),
    def("XPT", "962", "Platinum", "", 0, &[]),
    def("XTS", "963", "Codes specifically reserved for testing purposes", "", 0, &[]),
    def("XXX", "999", "No currency", "", 2, &[]),
    def("YER", "886", "Yemeni Rial", "", 2, &["YEMEN"]),
    def("ZAR", "710", "Rand", "", 2, &["SOUTH AFRICA"]),
    def("ZMK", "894", "Kwacha", "", 2, &["ZAMBIA"]),
    def("ZWD", "716", "Zimbabwe Dollar", "", 2, &["ZIMBABWE"]),
];

/// ISO 3166 alpha-2 country code to currency code.
#[rustfmt::skip]
pub(crate) const COUNTRY_CURRENCIES: &[(&str, &str)] = &[
    ("AF", "AFN"), ("AL", "ALL"), ("DZ", "DZD"), ("AS", "EUR"), ("AD", "EUR"), ("AO", "AOA"),
    ("AI", "XCD"), ("AG", "XCD"), ("AR", "ARS"), ("AM", "AMD"), ("AW", "ANG"), ("AU", "AUD"),
    ("AT", "EUR"), ("AZ", "AZN"), ("BS", "BSD"), ("BH", "BHD"), ("BD", "BDT"), ("BB", "BBD"),
    ("BY", "BYR"), ("BE", "EUR"), ("BZ", "BZD"), ("BM", "BMD"), ("BA", "BAM"), ("BW", "BWP"),
    ("BV", "NOK"), ("BR", "BRL"), ("IO", "USD"), ("BN", "BND"), ("BG", "BGN"), ("BI", "BIF"),
    ("KH", "KHR"), ("CA", "CAD"), ("CV", "CVE"), ("KY", "KYD"), ("CN", "CNY"), ("CX", "AUD"),
    ("CC", "AUD"), ("KM", "KMF"), ("CK", "NZD"), ("CR", "CRC"), ("HR", "HRK"), ("CU", "CUP"),
    ("CY", "EUR"), ("CZ", "CZK"), ("DK", "DKK"), ("DJ", "DJF"), ("DM", "XCD"), ("DO", "DOP"),
    ("TP", "IDR"), ("EG", "EGP"), ("ER", "ERN"), ("EE", "EEK"), ("ET", "ETB"), ("FK", "FKP"),
    ("FO", "DKK"), ("FJ", "FJD"), ("FI", "EUR"), ("FR", "EUR"), ("GF", "EUR"), ("PF", "XPF"),
    ("TF", "EUR"), ("GM", "GMD"), ("GE", "GEL"), ("DE", "EUR"), ("GH", "GHS"), ("GI", "GIP"),
    ("GR", "EUR"), ("GL", "DKK"), ("GD", "XCD"), ("GP", "EUR"), ("GU", "USD"), ("GT", "GTQ"),
    ("GN", "GNF"), ("GY", "GYD"), ("HM", "AUD"), ("HN", "HNL"), ("HK", "HKD"), ("HU", "HUF"),
    ("IS", "ISK"), ("IN", "INR"), ("ID", "IDR"), ("IR", "IRR"), ("IQ", "IQD"), ("IE", "EUR"),
    ("IL", "ILS"), ("IT", "EUR"), ("JM", "JMD"), ("JP", "JPY"), ("JO", "JOD"), ("KZ", "KZT"),
    ("KE", "KES"), ("KI", "AUD"), ("KP", "KPW"), ("KR", "KRW"), ("KW", "KWD"), ("KG", "KGS"),
    ("LA", "LAK"), ("LV", "LVL"), ("LB", "LBP"), ("LR", "LRD"), ("LY", "LYD"), ("LI", "CHF"),
    ("LT", "LTL"), ("LU", "EUR"), ("MO", "MOP"), ("MK", "MKD"), ("MW", "MWK"), ("MY", "MYR"),
    ("MV", "MVR"), ("MT", "EUR"), ("MH", "USD"), ("MQ", "EUR"), ("MR", "MRO"), ("MU", "MUR"),
    ("YT", "EUR"), ("FM", "USD"), ("MD", "MDL"), ("MC", "EUR"), ("MN", "MNT"), ("MS", "XCD"),
    ("MA", "MAD"), ("MZ", "MZN"), ("MM", "MMK"), ("NA", "ZAR"), ("NR", "AUD"), ("NP", "NPR"),
    ("NL", "EUR"), ("AN", "ANG"), ("NC", "XPF"), ("NZ", "NZD"), ("NI", "NIO"), ("NG", "NGN"),
    ("NU", "NZD"), ("NF", "AUD"), ("MP", "USD"), ("NO", "NOK"), ("OM", "OMR"), ("PK", "PKR"),
    ("PW", "USD"), ("PG", "PGK"), ("PY", "PYG"), ("PE", "PEN"), ("PH", "PHP"), ("PN", "NZD"),
    ("PL", "PLN"), ("PT", "EUR"), ("PR", "USD"), ("QA", "QAR"), ("RE", "EUR"), ("RO", "RON"),
    ("RU", "RUB"), ("RW", "RWF"), ("KN", "XCD"), ("LC", "XCD"), ("VC", "XCD"), ("WS", "WST"),
    ("SM", "EUR"), ("ST", "STD"), ("SA", "SAR"), ("SC", "SCR"), ("SL", "SLL"), ("SG", "SGD"),
    ("SK", "SKK"), ("SI", "EUR"), ("SB", "SBD"), ("SO", "SOS"), ("ZA", "ZAR"), ("GS", "GBP"),
    ("ES", "EUR"), ("LK", "LKR"), ("SD", "SDG"), ("SR", "SRD"), ("SJ", "NOK"), ("SZ", "SZL"),
    ("SE", "SEK"), ("CH", "CHF"), ("SY", "SYP"), ("TW", "TWD"), ("TJ", "TJS"), ("TZ", "TZS"),
    ("TH", "THB"), ("TK", "NZD"), ("TO", "TOP"), ("TT", "TTD"), ("TN", "TND"), ("TR", "TRY"),
    ("TM", "TMM"), ("TC", "USD"), ("TV", "AUD"), ("UG", "UGX"), ("UA", "UAH"), ("AE", "AED"),
    ("GB", "GBP"), ("US", "USD"), ("UM", "USD"), ("UZ", "UZS"), ("VU", "VUV"), ("VA", "EUR"),
    ("VN", "VND"), ("VG", "USD"), ("VI", "USD"), ("WF", "XPF"), ("EH", "MAD"), ("YE", "YER"),
    ("ZM", "ZMK"), ("ZW", "ZWD"),
];
