//! CSV export of compliance reports and content listings
//!
//! Files start with a UTF-8 byte order mark so spreadsheet tools pick the
//! right encoding for Indonesian text.

use anyhow::{anyhow, Result};
use rust_decimal::Decimal;

use crate::common::ReportPeriod;
use crate::domains::compliance::models::ComplianceReport;
use crate::domains::content::models::ContentListing;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub fn compliance_csv(report: &ComplianceReport) -> Result<Vec<u8>> {
    let mut writer = bom_writer();

    writer.write_record([
        "SKPD",
        "Kuota",
        "Disetujui",
        "Menunggu",
        "Ditolak",
        "Persentase",
        "Status",
    ])?;

    for agency in &report.agencies {
        writer.write_record([
            agency.agency_name.clone(),
            agency.monthly_quota.to_string(),
            agency.approved.to_string(),
            agency.pending.to_string(),
            agency.rejected.to_string(),
            format_percentage(agency.percentage),
            agency.status.label().to_string(),
        ])?;
    }

    let totals = &report.totals;
    writer.write_record([
        format!("Rata-rata ({} SKPD)", totals.total_agencies),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        format_percentage(totals.average_percentage),
        format!(
            "{} memenuhi, {} sebagian, {} belum memenuhi",
            totals.compliant, totals.partial, totals.non_compliant
        ),
    ])?;

    finish(writer, "compliance")
}

pub fn contents_csv(rows: &[ContentListing]) -> Result<Vec<u8>> {
    let mut writer = bom_writer();

    writer.write_record([
        "Judul",
        "SKPD",
        "Kategori",
        "Publisher",
        "Tanggal Publikasi",
        "URL",
        "Status",
    ])?;

    for row in rows {
        let date = row.publication_date.format("%Y-%m-%d").to_string();
        writer.write_record([
            row.title.as_str(),
            row.agency_name.as_str(),
            row.category_name.as_str(),
            row.publisher_name.as_str(),
            date.as_str(),
            row.publication_url.as_str(),
            row.status.label(),
        ])?;
    }

    finish(writer, "content")
}

/// e.g. `kepatuhan-2025-03.csv`
pub fn export_filename(prefix: &str, period: ReportPeriod) -> String {
    format!("{}-{}.csv", prefix, period)
}

fn bom_writer() -> csv::Writer<Vec<u8>> {
    csv::Writer::from_writer(UTF8_BOM.to_vec())
}

fn finish(writer: csv::Writer<Vec<u8>>, what: &str) -> Result<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|e| anyhow!("Failed to flush {} CSV: {}", what, e.error()))
}

fn format_percentage(value: Decimal) -> String {
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{AgencyId, ContentId};
    use crate::domains::compliance::models::AgencyPeriodCounts;
    use crate::domains::content::models::ContentStatus;
    use chrono::NaiveDate;

    fn report() -> ComplianceReport {
        ComplianceReport::new(
            ReportPeriod::new(3, 2025).unwrap(),
            vec![AgencyPeriodCounts {
                agency_id: AgencyId::new(),
                agency_name: "Dinas Kesehatan, Kab. Contoh".to_string(),
                monthly_quota: 3,
                approved: 2,
                pending: 1,
                rejected: 1,
            }],
        )
    }

    #[test]
    fn compliance_csv_has_bom_header_rows_and_totals() {
        let bytes = compliance_csv(&report()).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));

        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "SKPD,Kuota,Disetujui,Menunggu,Ditolak,Persentase,Status");
        assert_eq!(lines[1], "\"Dinas Kesehatan, Kab. Contoh\",3,2,1,1,66.67,Sebagian");
        assert_eq!(
            lines[2],
            "Rata-rata (1 SKPD),,,,,66.67,\"0 memenuhi, 1 sebagian, 0 belum memenuhi\""
        );
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn whole_percentages_keep_two_decimals() {
        assert_eq!(format_percentage(Decimal::ONE_HUNDRED), "100.00");
        assert_eq!(format_percentage(Decimal::ZERO), "0.00");
    }

    #[test]
    fn contents_csv_lists_each_item() {
        let rows = vec![ContentListing {
            id: ContentId::new(),
            agency_name: "Dinas Pendidikan".to_string(),
            category_name: "Berita".to_string(),
            publisher_name: "Sari".to_string(),
            title: "Penerimaan \"Siswa\" Baru".to_string(),
            publication_url: "https://disdik.go.id/ppdb".to_string(),
            publication_date: NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
            status: ContentStatus::Approved,
        }];

        let bytes = contents_csv(&rows).unwrap();
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "\"Penerimaan \"\"Siswa\"\" Baru\",Dinas Pendidikan,Berita,Sari,2025-03-05,https://disdik.go.id/ppdb,Disetujui"
        );
    }

    #[test]
    fn filename_includes_period() {
        let period = ReportPeriod::new(3, 2025).unwrap();
        assert_eq!(export_filename("kepatuhan", period), "kepatuhan-2025-03.csv");
    }
}
