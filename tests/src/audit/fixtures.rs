/// A small site: two corporate APs, one guest AP, one printer broadcasting its own SSID.
pub const SITE_REGISTRY: &str = "\
# Headquarters, floor 2
[authorized]
00:11:22:33:44:01=CorpNet
00:11:22:33:44:02=CorpNet

[known]
66:77:88:99:aa:01=GuestNet
66:77:88:99:aa:02=DIRECT-printer

# typo kept on purpose, must not stop the load
[known
";

pub const SITE_SCAN: &str = "\
BSS 00:11:22:33:44:01(on wlan0) -- associated
\tTSF: 5191124618 usec (0d, 01:26:31)
\tfreq: 2412
\tbeacon interval: 100 TUs
\tlast seen: 120 ms ago
\tSSID: CorpNet
\tRSN:\t * Version: 1
BSS 00:11:22:33:44:02(on wlan0)
\tfreq: 5180
\tlast seen: 90 ms ago
\tSSID: Lab
BSS 66:77:88:99:aa:01(on wlan0)
\tfreq: 2437
\tSSID: GuestNet
BSS de:ad:be:ef:00:01(on wlan0)
\tfreq: 2462
\tlast seen: 30 ms ago
\tSSID: CorpNet
BSS de:ad:be:ef:00:02(on wlan0)
\tfreq: 2412
\tSSID:\x20
BSS 66:77:88:99:aa:02(on wlan0)
\tfreq: 2437
\tSSID: DIRECT-printer
";

pub fn block(bssid: &str, ssid: &str) -> String {
    format!("BSS {bssid}(on wlan0)\n\tfreq: 2412\n\tSSID: {ssid}\n")
}
