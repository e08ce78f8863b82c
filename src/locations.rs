//! Static Jiangxi location tables.
//!
//! Identifiers map to a display name and, separately, to decimal-degree
//! coordinates. A location resolves only when both tables know the id.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::WeatherError;

/// A resolvable location
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocationEntry {
    pub id: &'static str,
    pub city: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

static NAMES_BY_ID: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| LOCATION_NAMES.iter().copied().collect());

static COORDS_BY_ID: LazyLock<HashMap<&'static str, (f64, f64)>> = LazyLock::new(|| {
    LOCATION_COORDS
        .iter()
        .map(|&(id, lat, lon)| (id, (lat, lon)))
        .collect()
});

/// Looks up the display name and coordinates for `location_id`.
pub fn resolve(location_id: &str) -> Result<LocationEntry, WeatherError> {
    let not_found = || WeatherError::LocationNotFound(location_id.to_string());

    let (id, city) = NAMES_BY_ID
        .get_key_value(location_id)
        .map(|(id, city)| (*id, *city))
        .ok_or_else(not_found)?;
    let &(latitude, longitude) = COORDS_BY_ID.get(location_id).ok_or_else(not_found)?;

    Ok(LocationEntry {
        id,
        city,
        latitude,
        longitude,
    })
}

/// Every resolvable location, in table order
pub fn all() -> Vec<LocationEntry> {
    LOCATION_NAMES
        .iter()
        .filter_map(|(id, _)| resolve(id).ok())
        .collect()
}

static LOCATION_NAMES: &[(&str, &str)] = &[
    ("nanchang", "南昌市"),
    ("donghu", "东湖区"),
    ("xihu", "西湖区"),
    ("qingyunpu", "青云谱区"),
    ("qingshanhu", "青山湖区"),
    ("xinjian", "新建区"),
    ("nanchang_county", "南昌县"),
    ("anyi", "安义县"),
    ("jinxian", "进贤县"),
    ("jiujiang", "九江市"),
    ("xunyang", "浔阳区"),
    ("lianxi", "濂溪区"),
    ("chaisang", "柴桑区"),
    ("wuning", "武宁县"),
    ("xiushui", "修水县"),
    ("yongxiu", "永修县"),
    ("dean", "德安县"),
    ("duchang", "都昌县"),
    ("hukou", "湖口县"),
    ("pengze", "彭泽县"),
    ("ruichang", "瑞昌市"),
    ("gongqingcheng", "共青城市"),
    ("lushan", "庐山市"),
    ("shangrao", "上饶市"),
    ("xinzhou", "信州区"),
    ("guangfeng", "广丰区"),
    ("guangxin", "广信区"),
    ("yugan", "余干县"),
    ("poyang", "鄱阳县"),
    ("wannian", "万年县"),
    ("wuyuan", "婺源县"),
    ("dexing", "德兴市"),
    ("yiyang", "弋阳县"),
    ("hengfeng", "横峰县"),
    ("qianshan", "铅山县"),
    ("yushan", "玉山县"),
    ("ganzhou", "赣州市"),
    ("zhanggong", "章贡区"),
    ("nankang", "南康区"),
    ("ganxian", "赣县区"),
    ("xinfeng", "信丰县"),
    ("dayu", "大余县"),
    ("shangyou", "上犹县"),
    ("chongyi", "崇义县"),
    ("anyuan", "安远县"),
    ("longnan", "龙南县"),
    ("dingnan", "定南县"),
    ("quannan", "全南县"),
    ("ningdu", "宁都县"),
    ("yudu", "于都县"),
    ("xingguo", "兴国县"),
    ("huichang", "会昌县"),
    ("xunwu", "寻乌县"),
    ("shicheng", "石城县"),
    ("ruijin", "瑞金市"),
    ("jian", "吉安市"),
    ("jizhou", "吉州区"),
    ("qingyuan", "青原区"),
    ("jishui", "吉水县"),
    ("jian_county", "吉安县"),
    ("xingan", "新干县"),
    ("yongfeng", "永丰县"),
    ("taihe", "泰和县"),
    ("suichuan", "遂川县"),
    ("wanan", "万安县"),
    ("anfu", "安福县"),
    ("yongxin", "永新县"),
    ("jinggangshan", "井冈山市"),
    ("yichun", "宜春市"),
    ("yuanzhou", "袁州区"),
    ("fengxin", "奉新县"),
    ("wanzai", "万载县"),
    ("shanggao", "上高县"),
    ("yifeng", "宜丰县"),
    ("jing_an", "靖安县"),
    ("tonggu", "铜鼓县"),
    ("fengcheng", "丰城市"),
    ("zhangshu", "樟树市"),
    ("gaoan", "高安市"),
    ("fuzhou", "抚州市"),
    ("linchuan", "临川区"),
    ("dongxiang", "东乡区"),
    ("nancheng", "南城县"),
    ("lichuan", "黎川县"),
    ("nanfeng", "南丰县"),
    ("chongren", "崇仁县"),
    ("lean", "乐安县"),
    ("yihuang", "宜黄县"),
    ("jinxi", "金溪县"),
    ("zixi", "资溪县"),
    ("guangchang", "广昌县"),
    ("pingxiang", "萍乡市"),
    ("anyuan_px", "安源区"),
    ("xiangdong", "湘东区"),
    ("lianhua", "莲花县"),
    ("shangli", "上栗县"),
    ("luxi", "芦溪县"),
    ("xinyu", "新余市"),
    ("yushui", "渝水区"),
    ("fenyi", "分宜县"),
    ("yingtan", "鹰潭市"),
    ("yujiang", "余江区"),
    ("guixi", "贵溪市"),
    ("jingdezhen", "景德镇市"),
    ("changjiang", "昌江区"),
    ("zhushan", "珠山区"),
    ("fuliang", "浮梁县"),
    ("leping", "乐平市"),
];

static LOCATION_COORDS: &[(&str, f64, f64)] = &[
    ("nanchang", 28.6820, 115.8579),
    ("donghu", 28.6850, 115.8990),
    ("xihu", 28.6560, 115.8770),
    ("qingyunpu", 28.6210, 115.9250),
    ("qingshanhu", 28.6820, 115.9620),
    ("xinjian", 28.6920, 115.8150),
    ("nanchang_county", 28.5450, 115.9430),
    ("anyi", 28.8450, 115.5480),
    ("jinxian", 28.3760, 116.2360),
    ("jiujiang", 29.7050, 116.0010),
    ("xunyang", 29.7280, 115.9900),
    ("lianxi", 29.6700, 115.9850),
    ("chaisang", 29.6000, 115.9110),
    ("wuning", 29.2560, 115.1010),
    ("xiushui", 29.0250, 114.5470),
    ("yongxiu", 29.0220, 115.8090),
    ("dean", 29.3170, 115.7560),
    ("duchang", 29.2730, 116.1740),
    ("hukou", 29.7410, 116.2150),
    ("pengze", 29.8960, 116.5490),
    ("ruichang", 29.6740, 115.6810),
    ("gongqingcheng", 29.2460, 115.8040),
    ("lushan", 29.4490, 115.9820),
    ("shangrao", 28.4540, 117.9430),
    ("xinzhou", 28.4330, 117.9670),
    ("guangfeng", 28.4350, 118.1910),
    ("guangxin", 28.3190, 117.9750),
    ("yugan", 28.6950, 116.6940),
    ("poyang", 29.0110, 116.6730),
    ("wannian", 28.6950, 117.0690),
    ("wuyuan", 29.2450, 117.8610),
    ("dexing", 28.9470, 117.5790),
    ("yiyang", 28.3790, 117.8080),
    ("hengfeng", 28.4070, 117.5960),
    ("qianshan", 28.3090, 117.2080),
    ("yushan", 28.6820, 118.2450),
    ("ganzhou", 25.8310, 114.9340),
    ("zhanggong", 25.8170, 114.9350),
    ("nankang", 25.6630, 114.7650),
    ("ganxian", 25.8460, 115.0120),
    ("xinfeng", 25.7690, 114.2090),
    ("dayu", 25.1140, 114.3620),
    ("shangyou", 25.8880, 114.5500),
    ("chongyi", 25.6810, 114.3080),
    ("anyuan", 24.9220, 115.3930),
    ("longnan", 24.9110, 114.7890),
    ("dingnan", 24.7840, 115.0280),
    ("quannan", 24.7420, 114.5300),
    ("ningdu", 26.4700, 116.0090),
    ("yudu", 25.9520, 115.4140),
    ("xingguo", 26.3380, 115.3630),
    ("huichang", 25.5840, 115.7860),
    ("xunwu", 24.9540, 115.6490),
    ("shicheng", 26.3150, 116.3440),
    ("ruijin", 25.8850, 116.0270),
    ("jian", 27.1170, 114.9860),
    ("jizhou", 27.1110, 115.0070),
    ("qingyuan", 27.0860, 114.9780),
    ("jishui", 27.2290, 115.1350),
    ("jian_county", 27.0390, 114.9990),
    ("xingan", 27.3880, 115.3960),
    ("yongfeng", 27.3180, 115.4410),
    ("taihe", 26.7910, 114.9090),
    ("suichuan", 26.3130, 114.5200),
    ("wanan", 26.4580, 114.7860),
    ("anfu", 27.3930, 114.6200),
    ("yongxin", 26.9450, 114.2430),
    ("jinggangshan", 26.7480, 114.2890),
    ("yichun", 27.8150, 114.4170),
    ("yuanzhou", 27.7970, 114.4230),
    ("fengxin", 28.7770, 115.4000),
    ("wanzai", 28.1060, 114.4450),
    ("shanggao", 28.2330, 114.9250),
    ("yifeng", 28.3920, 114.7800),
    ("jing_an", 28.8620, 115.3620),
    ("tonggu", 28.5230, 114.3710),
    ("fengcheng", 28.1920, 115.7710),
    ("zhangshu", 28.0530, 115.5460),
    ("gaoan", 28.4170, 115.3750),
    ("fuzhou", 27.9490, 116.3580),
    ("linchuan", 27.9770, 116.3130),
    ("dongxiang", 28.2360, 116.5900),
    ("nancheng", 27.5540, 116.6380),
    ("lichuan", 27.4180, 116.9080),
    ("nanfeng", 27.2180, 116.5250),
    ("chongren", 27.7540, 116.0750),
    ("lean", 27.4280, 115.8300),
    ("yihuang", 27.5540, 116.2360),
    ("jinxi", 27.9450, 116.7550),
    ("zixi", 27.7340, 117.0610),
    ("guangchang", 26.8440, 116.3370),
    ("pingxiang", 27.6230, 113.8520),
    ("anyuan_px", 27.6150, 113.8700),
    ("xiangdong", 27.6390, 113.7200),
    ("lianhua", 27.1270, 113.9620),
    ("shangli", 27.8800, 114.0100),
    ("luxi", 27.6290, 114.0290),
    ("xinyu", 27.8180, 114.9170),
    ("yushui", 27.8170, 114.9440),
    ("fenyi", 27.8150, 114.6750),
    ("yingtan", 28.2380, 117.0330),
    ("yujiang", 28.2150, 116.8180),
    ("guixi", 28.2920, 117.2120),
    ("jingdezhen", 29.2686, 117.1786),
    ("changjiang", 29.2730, 117.1860),
    ("zhushan", 29.3010, 117.2150),
    ("fuliang", 29.3380, 117.2150),
    ("leping", 28.9620, 117.1300),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_LOCATION_ID;
    use std::collections::HashSet;

    #[test]
    fn test_resolve_nanchang() {
        let entry = resolve("nanchang").unwrap();
        assert_eq!(entry.id, "nanchang");
        assert_eq!(entry.city, "南昌市");
        assert_eq!(entry.latitude, 28.6820);
        assert_eq!(entry.longitude, 115.8579);
    }

    #[test]
    fn test_resolve_pairs_name_with_coordinates() {
        let entry = resolve("anyuan_px").unwrap();
        assert_eq!(entry.city, "安源区");
        assert_eq!((entry.latitude, entry.longitude), (27.6150, 113.8700));

        let entry = resolve("anyuan").unwrap();
        assert_eq!(entry.city, "安远县");
        assert_eq!((entry.latitude, entry.longitude), (24.9220, 115.3930));
    }

    #[test]
    fn test_resolve_unknown_location() {
        let err = resolve("beijing").unwrap_err();
        assert!(matches!(err, WeatherError::LocationNotFound(ref id) if id == "beijing"));
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert!(resolve("Nanchang").is_err());
        assert!(resolve("").is_err());
    }

    #[test]
    fn test_default_location_resolves() {
        assert!(resolve(DEFAULT_LOCATION_ID).is_ok());
    }

    #[test]
    fn test_tables_cover_the_same_ids() {
        let names: HashSet<_> = LOCATION_NAMES.iter().map(|(id, _)| *id).collect();
        let coords: HashSet<_> = LOCATION_COORDS.iter().map(|(id, _, _)| *id).collect();
        assert_eq!(names.len(), LOCATION_NAMES.len(), "duplicate id in name table");
        assert_eq!(coords.len(), LOCATION_COORDS.len(), "duplicate id in coordinate table");
        assert_eq!(names, coords);
    }

    #[test]
    fn test_all_follows_table_order() {
        let locations = all();
        assert_eq!(locations.len(), 108);
        assert_eq!(locations[0].id, "nanchang");
        assert_eq!(locations[locations.len() - 1].id, "leping");
    }

    #[test]
    fn test_coordinates_lie_within_jiangxi() {
        for entry in all() {
            assert!((24.0..=30.5).contains(&entry.latitude), "{}", entry.id);
            assert!((113.5..=118.5).contains(&entry.longitude), "{}", entry.id);
        }
    }
}
