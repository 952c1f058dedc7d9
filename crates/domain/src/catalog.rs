//! Built-in inventory of the php.net machines.
//!
//! Used when no content file is configured.

use crate::machine::Machine;
use crate::page::{Block, Page};
use crate::text::RichText;

pub const TITLE: &str = "machine inventory";

fn host(hostname: &str, address: &str, hardware: impl Into<RichText>, aliases: &[&str]) -> Machine {
    Machine {
        hostname: hostname.to_string(),
        address: address.to_string(),
        hardware: hardware.into(),
        aliases: aliases.iter().map(ToString::to_string).collect(),
        notes: Vec::new(),
        contact: None,
    }
}

fn pair_ticket_system() -> Option<RichText> {
    Some(
        RichText::new()
            .text("Pair's ticket system ")
            .code("qs AT pair com")
            .text("."),
    )
}

/// The php.net machine inventory page.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn php_net() -> Page {
    let machines = vec![
        Machine {
            contact: Some("(support AT nexcess net)".into()),
            ..host(
                "nex1.php.net",
                "208.69.122.11",
                "Dual Xeon 2.8GHz, 2GB RAM, 2x120GB HD RAID1, CentOS",
                &["gcov"],
            )
        },
        Machine {
            contact: pair_ticket_system(),
            ..host(
                "pb1.php.net",
                "216.92.131.4",
                "dual p3/1000 xeon, 512MB RAM, 27GB HD, freebsd 4.11",
                &["lists.php.net", "news.php.net"],
            )
        },
        Machine {
            contact: pair_ticket_system(),
            ..host(
                "pb11.php.net",
                "216.92.131.65",
                "dual p3/1000 xeon, 512MB RAM, 70GB HD, freebsd 4.8",
                &["docs", "livedocs"],
            )
        },
        Machine {
            contact: pair_ticket_system(),
            ..host(
                "pb12.php.net",
                "216.92.131.66",
                "Pentium 4 2.8 GHz, 2GB DDR RAM, 120GB HD, freebsd 4.11",
                &["pear", "pecl"],
            )
        },
        Machine {
            notes: vec![
                "This machine is on a dedicated 10mbps switch. whilst it can maintain \
                 10mbps, it cannot burst above that."
                    .into(),
                "Being re-imaged...".into(),
            ],
            contact: Some("connect to irc.ev1.net:7000, join #ev1servers".into()),
            ..host(
                "rs1.php.net",
                "64.246.30.37",
                "p3/1GHz, 1GB RAM 40GB HD, redhat 7.2",
                &[],
            )
        },
        host(
            "sc1.php.net",
            "66.225.196.49",
            "2xP4-2400 (HT), 2GB RAM, 155GB HD",
            &["rsync", "snapsmaster"],
        ),
        Machine {
            contact: Some("Ole Sigurd Nyvold Hansen (Ole.S.Hansen AT hit no)".into()),
            ..host(
                "ez1.php.net",
                "128.39.198.38",
                "Dell PE 650, 1GB RAM, 120GB disk",
                &[
                    "bugs",
                    "embed",
                    "gtk",
                    "irssi.embed",
                    "museum",
                    "qa",
                    "smarty",
                    "snaps",
                ],
            )
        },
        Machine {
            contact: Some("Cameron Jones (cameron.jones AT spry.com)".into()),
            ..host(
                "sp1.php.net",
                "69.28.246.234",
                "Celeron 2.5GHz, 1GB RAM, 120GB HD, Debian GNU/Linux",
                &[],
            )
        },
        Machine {
            contact: Some(
                "Corey Shields, Oregon State OSL (cshields AT osuosl org). \
                 For support, (support AT osuosl.org)"
                    .into(),
            ),
            ..host(
                "osu1.php.net",
                "140.211.166.39",
                "Dual Xeon 2.4GHz, 1GB RAM, 36GB HD, RHEL 3",
                &["ecelerity", "master.php.net", "php.net MX"],
            )
        },
        Machine {
            contact: Some("Wez or George".into()),
            ..host("oti1.php.net", "66.80.117.35", "win32 snaps generator", &[])
        },
        Machine {
            contact: Some("Wez or George".into()),
            ..host(
                "oti2.php.net",
                "8.8.38.129",
                RichText::new()
                    .text("2x2.4GHz Xeon, 1GB RAM, 2x18GB SCSI disks. ")
                    .link(
                        "SuperMicro 6012L-6",
                        "http://www.supermicro.com/products/system/1U/6012/SYS-6012L-6.cfm",
                    ),
                &[],
            )
        },
        Machine {
            contact: Some("BinarySec".into()),
            ..host("ovh.php.net", "213.251.181.15", "?", &["pecl (work in progress)"])
        },
        Machine {
            contact: Some("Rasmus".into()),
            ..host(
                "y1.php.net",
                "66.163.161.116",
                "Dual Xeon 3GHz, 4GB RAM, 6x73GB SCSI HD RAID10, 64-bit FreeBSD6",
                &["chora", "cvs", "cvsup", "cvsweb", "lxr", "viewcvs"],
            )
        },
        Machine {
            contact: Some("Rasmus".into()),
            ..host(
                "y2.php.net",
                "66.163.161.117",
                "Dual Xeon 2.8GHz, 4GB RAM, 2x73GB SCSI HD RAID1, 64-bit FreeBSD6",
                &["www", "talks", "conf", "static", "download"],
            )
        },
    ];

    let mut blocks = vec![
        Block::prose(
            "php.net is supported by a number of machines provided by a number of \
             generous sponsors. this is a basic inventory of those machines and what \
             services they provide.",
        ),
        Block::prose(
            RichText::new()
                .text("Note regarding FreeBSD machines: Upgrades should be performed according to ")
                .link("this guide", "fbsd_upgrade.txt")
                .text("."),
        ),
    ];
    blocks.extend(machines.into_iter().map(Block::Machine));
    blocks.push(Block::prose("originally compiled by jim winstead, september 2001"));
    blocks.push(Block::prose("last update: $Id$"));

    Page {
        title: TITLE.to_string(),
        blocks,
    }
}
