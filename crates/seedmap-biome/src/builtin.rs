//! Standard biome list and default map colors, in registry index order.

use crate::BiomeColor;

const fn c(r: u8, g: u8, b: u8) -> BiomeColor {
    BiomeColor::new(r, g, b)
}

pub(crate) const BUILTIN_BIOMES: &[(&str, BiomeColor)] = &[
    ("Ocean", c(0, 0, 112)),
    ("Plains", c(141, 179, 96)),
    ("Desert", c(250, 148, 24)),
    ("Extreme Hills", c(96, 96, 96)),
    ("Forest", c(5, 102, 33)),
    ("Taiga", c(11, 102, 89)),
    ("Swampland", c(7, 249, 178)),
    ("River", c(0, 0, 255)),
    ("Hell", c(255, 0, 0)),
    ("The End", c(128, 128, 255)),
    ("Frozen Ocean", c(144, 144, 160)),
    ("Frozen River", c(160, 160, 255)),
    ("Ice Plains", c(255, 255, 255)),
    ("Ice Mountains", c(160, 160, 160)),
    ("Mushroom Island", c(255, 0, 255)),
    ("Mushroom Island Shore", c(160, 0, 255)),
    ("Beach", c(250, 222, 85)),
    ("Desert Hills", c(210, 95, 18)),
    ("Forest Hills", c(34, 85, 28)),
    ("Taiga Hills", c(22, 57, 51)),
    ("Extreme Hills Edge", c(114, 120, 154)),
    ("Jungle", c(83, 123, 9)),
    ("Jungle Hills", c(44, 66, 5)),
    ("Jungle Edge", c(98, 139, 23)),
    ("Deep Ocean", c(0, 0, 48)),
    ("Stone Beach", c(162, 162, 132)),
    ("Cold Beach", c(250, 240, 192)),
    ("Birch Forest", c(48, 116, 68)),
    ("Birch Forest Hills", c(31, 95, 50)),
    ("Roofed Forest", c(64, 81, 26)),
    ("Cold Taiga", c(49, 85, 74)),
    ("Cold Taiga Hills", c(36, 63, 54)),
    ("Mega Taiga", c(89, 102, 81)),
    ("Mega Taiga Hills", c(69, 79, 62)),
    ("Extreme Hills+", c(80, 112, 80)),
    ("Savanna", c(189, 178, 95)),
    ("Savanna Plateau", c(167, 157, 100)),
    ("Mesa", c(217, 69, 21)),
    ("Mesa Plateau F", c(176, 151, 101)),
    ("Mesa Plateau", c(202, 140, 101)),
    ("Sunflower Plains", c(181, 219, 136)),
    ("Desert M", c(255, 188, 64)),
    ("Extreme Hills M", c(136, 136, 136)),
    ("Flower Forest", c(45, 142, 73)),
    ("Taiga M", c(51, 142, 129)),
    ("Swampland M", c(47, 255, 218)),
    ("Ice Plains Spikes", c(180, 220, 220)),
    ("Jungle M", c(123, 163, 49)),
    ("Jungle Edge M", c(138, 179, 63)),
    ("Birch Forest M", c(88, 156, 108)),
    ("Birch Forest Hills M", c(71, 135, 90)),
    ("Roofed Forest M", c(104, 121, 66)),
    ("Cold Taiga M", c(89, 125, 114)),
    ("Mega Spruce Taiga", c(129, 142, 121)),
    ("Redwood Taiga Hills M", c(109, 119, 102)),
    ("Extreme Hills+ M", c(120, 152, 120)),
    ("Savanna M", c(229, 218, 135)),
    ("Savanna Plateau M", c(207, 197, 140)),
    ("Mesa (Bryce)", c(255, 109, 61)),
    ("Mesa Plateau F M", c(216, 191, 141)),
    ("Mesa Plateau M", c(242, 180, 141)),
];
