//! The 24 solar terms (节气).
//!
//! Dates come from the century-coefficient formula
//! `day = floor(y * 0.2422 + C) - L` with `y = year % 100` and `L` the leap
//! count (`(y-1)/4` for the January/February terms, `y/4` otherwise).
//! Coefficients are tabled per century; supported range 1901–2100.

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum SolarTerm {
    XiaoHan,
    DaHan,
    LiChun,
    YuShui,
    JingZhe,
    ChunFen,
    QingMing,
    GuYu,
    LiXia,
    XiaoMan,
    MangZhong,
    XiaZhi,
    XiaoShu,
    DaShu,
    LiQiu,
    ChuShu,
    BaiLu,
    QiuFen,
    HanLu,
    ShuangJiang,
    LiDong,
    XiaoXue,
    DaXue,
    DongZhi,
}

struct TermInfo {
    term: SolarTerm,
    id: &'static str,
    month: u32,
    /// Coefficient for 1901–2000.
    c20: f64,
    /// Coefficient for 2001–2100.
    c21: f64,
}

static TERMS: &[TermInfo] = &[
    TermInfo { term: SolarTerm::XiaoHan, id: "xiaohan", month: 1, c20: 6.11, c21: 5.4055 },
    TermInfo { term: SolarTerm::DaHan, id: "dahan", month: 1, c20: 20.84, c21: 20.12 },
    TermInfo { term: SolarTerm::LiChun, id: "lichun", month: 2, c20: 4.6295, c21: 3.87 },
    TermInfo { term: SolarTerm::YuShui, id: "yushui", month: 2, c20: 19.4599, c21: 18.73 },
    TermInfo { term: SolarTerm::JingZhe, id: "jingzhe", month: 3, c20: 6.3826, c21: 5.63 },
    TermInfo { term: SolarTerm::ChunFen, id: "chunfen", month: 3, c20: 21.4155, c21: 20.646 },
    TermInfo { term: SolarTerm::QingMing, id: "qingming", month: 4, c20: 5.59, c21: 4.81 },
    TermInfo { term: SolarTerm::GuYu, id: "guyu", month: 4, c20: 20.888, c21: 20.1 },
    TermInfo { term: SolarTerm::LiXia, id: "lixia", month: 5, c20: 6.318, c21: 5.52 },
    TermInfo { term: SolarTerm::XiaoMan, id: "xiaoman", month: 5, c20: 21.86, c21: 21.04 },
    TermInfo { term: SolarTerm::MangZhong, id: "mangzhong", month: 6, c20: 6.5, c21: 5.678 },
    TermInfo { term: SolarTerm::XiaZhi, id: "xiazhi", month: 6, c20: 22.2, c21: 21.37 },
    TermInfo { term: SolarTerm::XiaoShu, id: "xiaoshu", month: 7, c20: 7.928, c21: 7.108 },
    TermInfo { term: SolarTerm::DaShu, id: "dashu", month: 7, c20: 23.65, c21: 22.83 },
    TermInfo { term: SolarTerm::LiQiu, id: "liqiu", month: 8, c20: 8.35, c21: 7.5 },
    TermInfo { term: SolarTerm::ChuShu, id: "chushu", month: 8, c20: 23.95, c21: 23.13 },
    TermInfo { term: SolarTerm::BaiLu, id: "bailu", month: 9, c20: 8.44, c21: 7.646 },
    TermInfo { term: SolarTerm::QiuFen, id: "qiufen", month: 9, c20: 23.822, c21: 23.042 },
    TermInfo { term: SolarTerm::HanLu, id: "hanlu", month: 10, c20: 9.098, c21: 8.318 },
    TermInfo { term: SolarTerm::ShuangJiang, id: "shuangjiang", month: 10, c20: 24.218, c21: 23.438 },
    TermInfo { term: SolarTerm::LiDong, id: "lidong", month: 11, c20: 8.218, c21: 7.438 },
    TermInfo { term: SolarTerm::XiaoXue, id: "xiaoxue", month: 11, c20: 23.08, c21: 22.36 },
    TermInfo { term: SolarTerm::DaXue, id: "daxue", month: 12, c20: 7.9, c21: 7.18 },
    TermInfo { term: SolarTerm::DongZhi, id: "dongzhi", month: 12, c20: 22.6, c21: 21.94 },
];

impl SolarTerm {
    fn info(&self) -> &'static TermInfo {
        TERMS.iter().find(|t| t.term == *self).unwrap()
    }

    pub fn from_id(id: &str) -> Option<Self> {
        TERMS.iter().find(|t| t.id == id).map(|t| t.term)
    }

    pub fn as_id(&self) -> &'static str {
        self.info().id
    }

    /// The Gregorian date of this term in `year`, or `None` outside
    /// 1901–2100.
    pub fn date(&self, year: i32) -> Option<NaiveDate> {
        if !(1901..=2100).contains(&year) {
            return None;
        }
        let info = self.info();
        let c = if year <= 2000 { info.c20 } else { info.c21 };
        let y = (year % 100) as f64;
        let leap_count = if info.month <= 2 {
            ((year % 100) - 1).div_euclid(4)
        } else {
            (year % 100).div_euclid(4)
        };
        let day = (y * 0.2422 + c).floor() as i32 - leap_count;
        NaiveDate::from_ymd_opt(year, info.month, day as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn anchors_2025() {
        assert_eq!(SolarTerm::DongZhi.date(2025), Some(d(2025, 12, 21)));
        assert_eq!(SolarTerm::QingMing.date(2025), Some(d(2025, 4, 4)));
        assert_eq!(SolarTerm::LiChun.date(2025), Some(d(2025, 2, 3)));
        assert_eq!(SolarTerm::XiaZhi.date(2025), Some(d(2025, 6, 21)));
        assert_eq!(SolarTerm::XiaoHan.date(2025), Some(d(2025, 1, 5)));
    }

    #[test]
    fn id_round_trip() {
        assert_eq!(SolarTerm::from_id("dongzhi"), Some(SolarTerm::DongZhi));
        assert_eq!(SolarTerm::DongZhi.as_id(), "dongzhi");
        assert_eq!(SolarTerm::from_id("bogus"), None);
    }

    #[test]
    fn out_of_range_years() {
        assert_eq!(SolarTerm::DongZhi.date(1850), None);
        assert_eq!(SolarTerm::DongZhi.date(2150), None);
    }
}
