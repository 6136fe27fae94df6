//! Metadata tables compiled into the binary.
//!
//! Implements [`MetadataProvider`] over static tables so that an export needs
//! no files or network access. The tables are a bundled snapshot and are
//! never modified at runtime.

use anyhow::Result;

use crate::metadata::brands::BrandList;
use crate::metadata::provider::MetadataProvider;

/// Provider backed by the bundled snapshot tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinProvider;

impl BuiltinProvider {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataProvider for BuiltinProvider {
    fn name(&self) -> &'static str {
        "builtin"
    }

    fn device_brands(&self) -> Result<BrandList> {
        Ok(DEVICE_BRANDS.iter().copied().collect())
    }

    fn available_operating_systems(&self) -> Result<Vec<String>> {
        Ok(OPERATING_SYSTEMS.iter().map(|s| s.to_string()).collect())
    }

    fn available_browsers(&self) -> Result<Vec<String>> {
        Ok(BROWSERS.iter().map(|s| s.to_string()).collect())
    }
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// Brand code to brand name, in table order (not sorted).
const DEVICE_BRANDS: &[(&str, &str)] = &[
    ("5E", "2E"),
    ("2F", "F2 Mobile"),
    ("3Q", "3Q"),
    ("J7", "7 Mobile"),
    ("2Q", "3GNET"),
    ("4G", "4Good"),
    ("27", "3GO"),
    ("04", "4ife"),
    ("36", "360"),
    ("88", "8848"),
    ("41", "A1"),
    ("00", "Accent"),
    ("AE", "Ace"),
    ("AC", "Acer"),
    ("3K", "Acesse"),
    ("AD", "Advan"),
    ("AF", "AfriOne"),
    ("AI", "Airness"),
    ("AZ", "Ainol"),
    ("AL", "Alcatel"),
    ("AM", "Allview"),
    ("AO", "Amoi"),
    ("AN", "Arnova"),
    ("AP", "Apple"),
    ("AR", "Archos"),
    ("AS", "ARRIS"),
    ("AU", "Asus"),
    ("AX", "Audiovox"),
    ("AV", "Avvio"),
    ("BB", "BBK"),
    ("BE", "Becker"),
    ("BL", "Beetel"),
    ("BQ", "BenQ"),
    ("BS", "BenQ-Siemens"),
    ("BI", "Bird"),
    ("BK", "BlackBerry"),
    ("BU", "Blu"),
    ("BM", "Bmobile"),
    ("BN", "Barnes & Noble"),
    ("BX", "bq"),
    ("CT", "Capitel"),
    ("CS", "Casio"),
    ("CA", "Cat"),
    ("CH", "Cherry Mobile"),
    ("CN", "CnM"),
    ("CL", "Compal"),
    ("CO", "Coolpad"),
    ("CW", "Cowon"),
    ("CR", "CreNova"),
    ("CK", "Cricket"),
    ("CU", "Cube"),
    ("DE", "Denver"),
    ("DN", "Denver Electronics"),
    ("DL", "Dell"),
    ("DP", "Dopod"),
    ("DO", "Doogee"),
    ("EL", "Elephone"),
    ("EV", "Evertek"),
    ("EZ", "Ezze"),
    ("FA", "Fairphone"),
    ("FL", "Fly"),
    ("FU", "Fujitsu"),
    ("GI", "Gionee"),
    ("GO", "Google"),
    ("GR", "Gradiente"),
    ("HA", "Haier"),
    ("HS", "Hisense"),
    ("HT", "HTC"),
    ("HU", "Huawei"),
    ("HO", "Honor"),
    ("HY", "Hyundai"),
    ("IB", "iBall"),
    ("IJ", "i-Joy"),
    ("IM", "i-mobile"),
    ("IW", "iNew"),
    ("IF", "Infinix"),
    ("IX", "Intex"),
    ("IT", "itel"),
    ("JI", "Jiayu"),
    ("KA", "Karbonn"),
    ("KD", "KDDI"),
    ("KY", "Kyocera"),
    ("LA", "Lanix"),
    ("LE", "LeEco"),
    ("LN", "Lenovo"),
    ("LG", "LG"),
    ("LU", "LGUPlus"),
    ("MA", "Manta Multimedia"),
    ("MZ", "Meizu"),
    ("MI", "MicroMax"),
    ("MS", "Microsoft"),
    ("MO", "Mio"),
    ("MT", "Mitsubishi"),
    ("MR", "Motorola"),
    ("NE", "NEC"),
    ("NX", "Nexian"),
    ("NK", "Nokia"),
    ("NP", "Nothing Phone"),
    ("NV", "Nvidia"),
    ("ON", "OnePlus"),
    ("OP", "OPPO"),
    ("OR", "Orange"),
    ("PA", "Panasonic"),
    ("PL", "Palm"),
    ("PH", "Philips"),
    ("PO", "phoneOne"),
    ("PP", "PiPO"),
    ("PT", "Pantech"),
    ("QM", "QMobile"),
    ("RM", "Realme"),
    ("RK", "Roku"),
    ("SA", "Samsung"),
    ("SH", "Sharp"),
    ("SI", "Siemens"),
    ("SO", "Sony"),
    ("SP", "Spice"),
    ("TA", "Tesla"),
    ("TB", "Tecno Mobile"),
    ("TC", "TCL"),
    ("TE", "Telit"),
    ("TH", "TiPhone"),
    ("TI", "TIANYU"),
    ("TO", "Toshiba"),
    ("UM", "UMIDIGI"),
    ("VA", "Vaio"),
    ("VI", "Vitelcom"),
    ("VO", "Vodafone"),
    ("VV", "Vivo"),
    ("VZ", "Vizio"),
    ("WI", "Wiko"),
    ("XI", "Xiaomi"),
    ("XO", "Xolo"),
    ("YU", "Yuandao"),
    ("ZO", "Zopo"),
    ("ZT", "ZTE"),
];

/// Operating system names, in table order.
const OPERATING_SYSTEMS: &[&str] = &[
    "AIX",
    "Android",
    "AmigaOS",
    "Apple TV",
    "Arch Linux",
    "BackTrack",
    "Bada",
    "BeOS",
    "BlackBerry OS",
    "BlackBerry Tablet OS",
    "Brew",
    "CentOS",
    "Chrome OS",
    "CyanogenMod",
    "Debian",
    "DragonFly",
    "Fedora",
    "Firefox OS",
    "Fire OS",
    "FreeBSD",
    "Gentoo",
    "Google TV",
    "HarmonyOS",
    "HP-UX",
    "Haiku OS",
    "IRIX",
    "Inferno",
    "KaiOS",
    "Knoppix",
    "Kubuntu",
    "GNU/Linux",
    "Lubuntu",
    "VectorLinux",
    "Mac",
    "Maemo",
    "Mandriva",
    "MeeGo",
    "MocorDroid",
    "Mint",
    "MildWild",
    "MorphOS",
    "NetBSD",
    "MTK / Nucleus",
    "Nintendo",
    "Nintendo Mobile",
    "OS/2",
    "OSF1",
    "OpenBSD",
    "PlayStation Portable",
    "PlayStation",
    "Red Hat",
    "RISC OS",
    "Remix OS",
    "RazoDroiD",
    "Sabayon",
    "SUSE",
    "Sailfish OS",
    "Slackware",
    "Solaris",
    "Syllable",
    "Symbian",
    "Symbian OS",
    "Symbian OS Series 40",
    "Symbian OS Series 60",
    "Symbian^3",
    "ThreadX",
    "Tizen",
    "TmaxOS",
    "Ubuntu",
    "WebTV",
    "Windows",
    "Windows CE",
    "Windows IoT",
    "Windows Mobile",
    "Windows Phone",
    "Windows RT",
    "Xbox",
    "Xubuntu",
    "YunOs",
    "iOS",
    "palmOS",
    "webOS",
];

/// Browser names, in table order.
const BROWSERS: &[&str] = &[
    "2345 Browser",
    "360 Phone Browser",
    "360 Browser",
    "Avant Browser",
    "ABrowse",
    "ANT Fresco",
    "ANTGalio",
    "Aloha Browser",
    "Amaya",
    "Amigo",
    "Android Browser",
    "Arora",
    "Amiga Voyager",
    "Amiga Aweb",
    "Atomic Web Browser",
    "Avast Secure Browser",
    "Beaker Browser",
    "Beonex",
    "BlackBerry Browser",
    "Baidu Browser",
    "Baidu Spark",
    "Basilisk",
    "Brave",
    "BrowseX",
    "Camino",
    "Cheetah Browser",
    "Chrome Frame",
    "Chrome",
    "Chrome Mobile iOS",
    "Conkeror",
    "Chrome Mobile",
    "CoolNovo",
    "Coc Coc",
    "ChromePlus",
    "Chromium",
    "Cyberfox",
    "Cunaguaro",
    "Dolphin",
    "Dillo",
    "DuckDuckGo Privacy Browser",
    "Ecosia",
    "Epic",
    "Elinks",
    "Element Browser",
    "Microsoft Edge",
    "Epiphany",
    "Falkon",
    "Firefox Focus",
    "Firefox Mobile",
    "Firefox",
    "Flock",
    "Firefox Rocket",
    "Galeon",
    "GNOME Web",
    "Google Earth",
    "Huawei Browser",
    "IceCat",
    "IceDragon",
    "Iceweasel",
    "Internet Explorer",
    "IE Mobile",
    "Iron",
    "Kiwi",
    "Konqueror",
    "Kindle Browser",
    "K-meleon",
    "Links",
    "Lynx",
    "Maxthon",
    "Midori",
    "Mobile Safari",
    "Mozilla",
    "Netscape",
    "NetSurf",
    "Obigo",
    "Opera GX",
    "Opera Mini",
    "Opera Mobile",
    "Opera",
    "Opera Neon",
    "Pale Moon",
    "Puffin",
    "QQ Browser",
    "Qutebrowser",
    "Safari",
    "Samsung Browser",
    "SeaMonkey",
    "Silk",
    "Sleipnir",
    "Sogou Explorer",
    "Tor Browser",
    "UC Browser",
    "Vivaldi",
    "Waterfox",
    "WeChat",
    "Whale Browser",
    "Yandex Browser",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn brand_codes_are_unique() {
        let mut seen = HashSet::new();
        for (code, _) in DEVICE_BRANDS {
            assert!(seen.insert(*code), "duplicate brand code {}", code);
        }
    }

    #[test]
    fn tables_round_trip_through_provider() {
        let provider = BuiltinProvider::new();
        let brands = provider.device_brands().unwrap();
        assert_eq!(brands.len(), DEVICE_BRANDS.len());
        assert_eq!(brands.get("AP"), Some("Apple"));
        // Provider order is the table order, not sorted.
        assert_eq!(brands.codes().next(), Some("5E"));

        assert_eq!(
            provider.available_operating_systems().unwrap().len(),
            OPERATING_SYSTEMS.len()
        );
        assert_eq!(provider.available_browsers().unwrap()[0], "2345 Browser");
    }

    #[test]
    fn names_are_not_blank() {
        assert!(DEVICE_BRANDS.iter().all(|(c, n)| !c.is_empty() && !n.trim().is_empty()));
        assert!(OPERATING_SYSTEMS.iter().all(|n| !n.trim().is_empty()));
        assert!(BROWSERS.iter().all(|n| !n.trim().is_empty()));
    }
}
