use std::{fmt, str::FromStr};

/// Absolute screen position in physical pixels, as handed to the input driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenPoint {
    x: u32,
    y: u32,
}

impl ScreenPoint {
    pub const fn new(x: u32, y: u32) -> Self {
        Self {
            x,
            y
        }
    }

    pub fn get_x(&self) -> u32 {
        self.x
    }

    pub fn get_y(&self) -> u32 {
        self.y
    }
}

impl From<(u32, u32)> for ScreenPoint {
    fn from(pos: (u32, u32)) -> Self {
        Self { x: pos.0, y: pos.1 }
    }
}

impl fmt::Display for ScreenPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses the `x,y` form used in config files.
impl FromStr for ScreenPoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s.split_once(',').ok_or_else(|| format!("expected x,y but got {:?}", s))?;
        let x = x.trim().parse::<u32>().map_err(|e| format!("bad x in {:?}: {}", s, e))?;
        let y = y.trim().parse::<u32>().map_err(|e| format!("bad y in {:?}: {}", s, e))?;
        return Ok(Self::from((x, y)));
    }
}

/// A display rectangle in the virtual desktop. Origin can be negative on multi-monitor setups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenArea {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
}

impl ScreenArea {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, point: ScreenPoint) -> bool {
        let px = point.get_x() as i64;
        let py = point.get_y() as i64;
        let min_x = self.x as i64;
        let min_y = self.y as i64;
        return px >= min_x && px < min_x + self.width as i64
            && py >= min_y && py < min_y + self.height as i64;
    }
}

impl fmt::Display for ScreenArea {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_config_coordinates() {
        assert_eq!("1864,1370".parse::<ScreenPoint>().unwrap(), ScreenPoint::new(1864, 1370));
        assert_eq!(" 12 , 7 ".parse::<ScreenPoint>().unwrap(), ScreenPoint::new(12, 7));
        assert!("1864".parse::<ScreenPoint>().is_err());
        assert!("-5,3".parse::<ScreenPoint>().is_err());
        assert!("a,b".parse::<ScreenPoint>().is_err());
        assert_eq!(ScreenPoint::from((3, 4)), ScreenPoint::new(3, 4));
    }

    #[test]
    fn area_bounds_are_half_open() {
        let area = ScreenArea::new(0, 0, 2560, 1440);
        assert!(area.contains(ScreenPoint::new(0, 0)));
        assert!(area.contains(ScreenPoint::new(2559, 1439)));
        assert!(!area.contains(ScreenPoint::new(2560, 10)));
        assert!(!area.contains(ScreenPoint::new(2983, 309)));
    }

    #[test]
    fn area_with_offset_origin() {
        let area = ScreenArea::new(-1920, 0, 1920, 1080);
        assert!(!area.contains(ScreenPoint::new(100, 100)));
        let right = ScreenArea::new(1920, 0, 1920, 1080);
        assert!(right.contains(ScreenPoint::new(1920, 0)));
        assert!(!right.contains(ScreenPoint::new(1919, 0)));
    }
}
