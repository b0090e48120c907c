use std::fs;
use std::path::{Path, PathBuf};

use reconview_common::layout::ScanLayout;
use reconview_common::models::scan::ScanId;
use tempfile::TempDir;

pub const SUBDOMAINS: &str = "www.example.com\napi.example.com\n\n  dev.example.com  \nwww.example.com\n";

pub const WEB_FULL_INFO: &str = r#"{"timestamp":"2024-05-01T10:00:00Z","url":"https://www.example.com","title":"Example Domain","webserver":"ECS (dcb/7F83)","content_type":"text/html","status_code":200,"tech":["Azure CDN"]}
{"timestamp":"2024-05-01T10:00:01Z","url":"https://api.example.com:8443/v1","title":"API","webserver":"nginx","content_type":"application/json","status_code":401}{"timestamp":"2024-05-01T10:00:02Z","url":"http://dev.example.com","title":"","webserver":"Apache","content_type":"text/html","status_code":403}
{"timestamp":"2024-05-01T10:00:03Z","input":"orphan.example.com","failed":true}"#;

pub const NUCLEI: &str = r#"{"template-id":"tech-detect","matched-at":"https://www.example.com","type":"http","info":{"name":"Wappalyzer Technology Detection","author":["hakluke"],"severity":"info","tags":["tech"]}}
{"template-id":"git-config","matched-at":"https://dev.example.com/.git/config","type":"http","info":{"name":"Git Config File Disclosure","author":["pdteam","geeknik"],"severity":"medium","description":"Git configuration was detected.","reference":["https://example.org/git"],"tags":["config","git","exposure"]}}
{"template-id": "broken",
{"template-id":"CVE-2021-44228","matched-at":"https://api.example.com:8443/v1","type":"http","info":{"name":"Apache Log4j2 RCE","author":"melbadry9","severity":"critical","reference":null,"tags":["cve","rce","log4j"]}}
"#;

pub const EMAILS: &str = "admin@example.com\nsecurity@example.com\n";

pub const PORTSCAN: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE nmaprun>
<?xml-stylesheet href="file:///usr/share/nmap/nmap.xsl" type="text/xsl"?>
<nmaprun scanner="nmap" args="nmap -Pn -sV --top-ports 100 -oX portscan_active.xml" start="1714557600" version="7.94">
<scaninfo type="syn" protocol="tcp" numservices="100" services="7,9,13"/>
<host starttime="1714557601" endtime="1714557630"><status state="up" reason="user-set" reason_ttl="0"/>
<address addr="93.184.216.34" addrtype="ipv4"/>
<hostnames>
<hostname name="www.example.com" type="user"/>
<hostname name="example.com" type="PTR"/>
</hostnames>
<ports><extraports state="filtered" count="97">
<extrareasons reason="no-response" count="97" proto="tcp" ports="1-21"/>
</extraports>
<port protocol="tcp" portid="80"><state state="open" reason="syn-ack" reason_ttl="56"/><service name="http" product="ECS" method="probed" conf="10"/></port>
<port protocol="tcp" portid="443"><state state="open" reason="syn-ack" reason_ttl="56"/><service name="https" product="ECS" version="dcb/7F83" tunnel="ssl" method="probed" conf="10"/></port>
<port protocol="tcp" portid="1935"><state state="closed" reason="reset" reason_ttl="56"/></port>
</ports>
<times srtt="1000" rttvar="500" to="100000"/>
</host>
<host starttime="1714557601" endtime="1714557630"><status state="up" reason="user-set" reason_ttl="0"/>
<address addr="203.0.113.10" addrtype="ipv4"/>
<hostnames>
</hostnames>
<ports>
<port protocol="tcp" portid="22"><state state="open" reason="syn-ack" reason_ttl="56"/><service name="ssh" product="OpenSSH" version="8.9p1 Ubuntu 3ubuntu0.6" extrainfo="Ubuntu Linux; protocol 2.0" ostype="Linux" method="probed" conf="10"/></port>
</ports>
</host>
<runstats><finished time="1714557630" timestr="Wed May  1 10:00:30 2024" elapsed="30.00" exit="success"/><hosts up="2" down="0" total="2"/></runstats>
</nmaprun>
"#;

/// A throwaway recon root.
pub struct ReconTree {
    dir: TempDir,
}

impl ReconTree {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("creating temp recon root"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn layout(&self, scan: &str) -> ScanLayout {
        let id: ScanId = scan.parse().expect("valid scan id");
        ScanLayout::new(self.root(), &id)
    }

    pub fn write(&self, path: PathBuf, contents: impl AsRef<[u8]>) -> PathBuf {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("creating artifact directory");
        }
        fs::write(&path, contents).expect("writing artifact");
        path
    }

    pub fn empty_scan(&self, scan: &str) -> ScanLayout {
        let layout = self.layout(scan);
        fs::create_dir_all(layout.dir()).expect("creating scan directory");
        layout
    }

    /// A scan with every artifact the pipeline produces, plus two screenshots.
    pub fn full_scan(&self, scan: &str) -> ScanLayout {
        let layout = self.empty_scan(scan);
        self.write(layout.subdomains(), SUBDOMAINS);
        self.write(layout.web_full_info(), WEB_FULL_INFO);
        self.write(layout.nuclei_info(), NUCLEI);
        self.write(layout.emails(), EMAILS);
        self.write(layout.portscan(), PORTSCAN);
        self.write(layout.screenshots().join("www_example_com.png"), b"\x89PNG");
        self.write(layout.screenshots().join("https:__api.example.com:8443_v1.png"), b"\x89PNG");
        layout
    }
}
