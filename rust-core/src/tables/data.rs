//! Precomputed trigonometric tables, `round(1000 * cos|sin(2πk/N))`.
//!
//! Generated offline; do not edit by hand.

pub(crate) static COS_32: [i16; 32] = [
    1000, 981, 924, 831, 707, 556, 383, 195, 0, -195, -383, -556, -707, -831, -924, -981,
    -1000, -981, -924, -831, -707, -556, -383, -195, 0, 195, 383, 556, 707, 831, 924, 981,
];

pub(crate) static SIN_32: [i16; 32] = [
    0, 195, 383, 556, 707, 831, 924, 981, 1000, 981, 924, 831, 707, 556, 383, 195,
    0, -195, -383, -556, -707, -831, -924, -981, -1000, -981, -924, -831, -707, -556, -383, -195,
];

pub(crate) static COS_64: [i16; 64] = [
    1000, 995, 981, 957, 924, 882, 831, 773, 707, 634, 556, 471, 383, 290, 195, 98,
    0, -98, -195, -290, -383, -471, -556, -634, -707, -773, -831, -882, -924, -957, -981, -995,
    -1000, -995, -981, -957, -924, -882, -831, -773, -707, -634, -556, -471, -383, -290, -195, -98,
    0, 98, 195, 290, 383, 471, 556, 634, 707, 773, 831, 882, 924, 957, 981, 995,
];

pub(crate) static SIN_64: [i16; 64] = [
    0, 98, 195, 290, 383, 471, 556, 634, 707, 773, 831, 882, 924, 957, 981, 995,
    1000, 995, 981, 957, 924, 882, 831, 773, 707, 634, 556, 471, 383, 290, 195, 98,
    0, -98, -195, -290, -383, -471, -556, -634, -707, -773, -831, -882, -924, -957, -981, -995,
    -1000, -995, -981, -957, -924, -882, -831, -773, -707, -634, -556, -471, -383, -290, -195, -98,
];

pub(crate) static COS_128: [i16; 128] = [
    1000, 999, 995, 989, 981, 970, 957, 942, 924, 904, 882, 858, 831, 803, 773, 741,
    707, 672, 634, 596, 556, 514, 471, 428, 383, 337, 290, 243, 195, 147, 98, 49,
    0, -49, -98, -147, -195, -243, -290, -337, -383, -428, -471, -514, -556, -596, -634, -672,
    -707, -741, -773, -803, -831, -858, -882, -904, -924, -942, -957, -970, -981, -989, -995, -999,
    -1000, -999, -995, -989, -981, -970, -957, -942, -924, -904, -882, -858, -831, -803, -773, -741,
    -707, -672, -634, -596, -556, -514, -471, -428, -383, -337, -290, -243, -195, -147, -98, -49,
    0, 49, 98, 147, 195, 243, 290, 337, 383, 428, 471, 514, 556, 596, 634, 672,
    707, 741, 773, 803, 831, 858, 882, 904, 924, 942, 957, 970, 981, 989, 995, 999,
];

pub(crate) static SIN_128: [i16; 128] = [
    0, 49, 98, 147, 195, 243, 290, 337, 383, 428, 471, 514, 556, 596, 634, 672,
    707, 741, 773, 803, 831, 858, 882, 904, 924, 942, 957, 970, 981, 989, 995, 999,
    1000, 999, 995, 989, 981, 970, 957, 942, 924, 904, 882, 858, 831, 803, 773, 741,
    707, 672, 634, 596, 556, 514, 471, 428, 383, 337, 290, 243, 195, 147, 98, 49,
    0, -49, -98, -147, -195, -243, -290, -337, -383, -428, -471, -514, -556, -596, -634, -672,
    -707, -741, -773, -803, -831, -858, -882, -904, -924, -942, -957, -970, -981, -989, -995, -999,
    -1000, -999, -995, -989, -981, -970, -957, -942, -924, -904, -882, -858, -831, -803, -773, -741,
    -707, -672, -634, -596, -556, -514, -471, -428, -383, -337, -290, -243, -195, -147, -98, -49,
];

pub(crate) static COS_256: [i16; 256] = [
    1000, 1000, 999, 997, 995, 992, 989, 985, 981, 976, 970, 964, 957, 950, 942, 933,
    924, 914, 904, 893, 882, 870, 858, 845, 831, 818, 803, 788, 773, 757, 741, 724,
    707, 690, 672, 653, 634, 615, 596, 576, 556, 535, 514, 493, 471, 450, 428, 405,
    383, 360, 337, 314, 290, 267, 243, 219, 195, 171, 147, 122, 98, 74, 49, 25,
    0, -25, -49, -74, -98, -122, -147, -171, -195, -219, -243, -267, -290, -314, -337, -360,
    -383, -405, -428, -450, -471, -493, -514, -535, -556, -576, -596, -615, -634, -653, -672, -690,
    -707, -724, -741, -757, -773, -788, -803, -818, -831, -845, -858, -870, -882, -893, -904, -914,
    -924, -933, -942, -950, -957, -964, -970, -976, -981, -985, -989, -992, -995, -997, -999, -1000,
    -1000, -1000, -999, -997, -995, -992, -989, -985, -981, -976, -970, -964, -957, -950, -942, -933,
    -924, -914, -904, -893, -882, -870, -858, -845, -831, -818, -803, -788, -773, -757, -741, -724,
    -707, -690, -672, -653, -634, -615, -596, -576, -556, -535, -514, -493, -471, -450, -428, -405,
    -383, -360, -337, -314, -290, -267, -243, -219, -195, -171, -147, -122, -98, -74, -49, -25,
    0, 25, 49, 74, 98, 122, 147, 171, 195, 219, 243, 267, 290, 314, 337, 360,
    383, 405, 428, 450, 471, 493, 514, 535, 556, 576, 596, 615, 634, 653, 672, 690,
    707, 724, 741, 757, 773, 788, 803, 818, 831, 845, 858, 870, 882, 893, 904, 914,
    924, 933, 942, 950, 957, 964, 970, 976, 981, 985, 989, 992, 995, 997, 999, 1000,
];

pub(crate) static SIN_256: [i16; 256] = [
    0, 25, 49, 74, 98, 122, 147, 171, 195, 219, 243, 267, 290, 314, 337, 360,
    383, 405, 428, 450, 471, 493, 514, 535, 556, 576, 596, 615, 634, 653, 672, 690,
    707, 724, 741, 757, 773, 788, 803, 818, 831, 845, 858, 870, 882, 893, 904, 914,
    924, 933, 942, 950, 957, 964, 970, 976, 981, 985, 989, 992, 995, 997, 999, 1000,
    1000, 1000, 999, 997, 995, 992, 989, 985, 981, 976, 970, 964, 957, 950, 942, 933,
    924, 914, 904, 893, 882, 870, 858, 845, 831, 818, 803, 788, 773, 757, 741, 724,
    707, 690, 672, 653, 634, 615, 596, 576, 556, 535, 514, 493, 471, 450, 428, 405,
    383, 360, 337, 314, 290, 267, 243, 219, 195, 171, 147, 122, 98, 74, 49, 25,
    0, -25, -49, -74, -98, -122, -147, -171, -195, -219, -243, -267, -290, -314, -337, -360,
    -383, -405, -428, -450, -471, -493, -514, -535, -556, -576, -596, -615, -634, -653, -672, -690,
    -707, -724, -741, -757, -773, -788, -803, -818, -831, -845, -858, -870, -882, -893, -904, -914,
    -924, -933, -942, -950, -957, -964, -970, -976, -981, -985, -989, -992, -995, -997, -999, -1000,
    -1000, -1000, -999, -997, -995, -992, -989, -985, -981, -976, -970, -964, -957, -950, -942, -933,
    -924, -914, -904, -893, -882, -870, -858, -845, -831, -818, -803, -788, -773, -757, -741, -724,
    -707, -690, -672, -653, -634, -615, -596, -576, -556, -535, -514, -493, -471, -450, -428, -405,
    -383, -360, -337, -314, -290, -267, -243, -219, -195, -171, -147, -122, -98, -74, -49, -25,
];

pub(crate) static COS_512: [i16; 512] = [
    1000, 1000, 1000, 999, 999, 998, 997, 996, 995, 994, 992, 991, 989, 987, 985, 983,
    981, 978, 976, 973, 970, 967, 964, 960, 957, 953, 950, 946, 942, 937, 933, 929,
    924, 919, 914, 909, 904, 899, 893, 888, 882, 876, 870, 864, 858, 851, 845, 838,
    831, 825, 818, 810, 803, 796, 788, 781, 773, 765, 757, 749, 741, 733, 724, 716,
    707, 698, 690, 681, 672, 662, 653, 644, 634, 625, 615, 606, 596, 586, 576, 566,
    556, 545, 535, 525, 514, 504, 493, 482, 471, 461, 450, 439, 428, 416, 405, 394,
    383, 371, 360, 348, 337, 325, 314, 302, 290, 279, 267, 255, 243, 231, 219, 207,
    195, 183, 171, 159, 147, 135, 122, 110, 98, 86, 74, 61, 49, 37, 25, 12,
    0, -12, -25, -37, -49, -61, -74, -86, -98, -110, -122, -135, -147, -159, -171, -183,
    -195, -207, -219, -231, -243, -255, -267, -279, -290, -302, -314, -325, -337, -348, -360, -371,
    -383, -394, -405, -416, -428, -439, -450, -461, -471, -482, -493, -504, -514, -525, -535, -545,
    -556, -566, -576, -586, -596, -606, -615, -625, -634, -644, -653, -662, -672, -681, -690, -698,
    -707, -716, -724, -733, -741, -749, -757, -765, -773, -781, -788, -796, -803, -810, -818, -825,
    -831, -838, -845, -851, -858, -864, -870, -876, -882, -888, -893, -899, -904, -909, -914, -919,
    -924, -929, -933, -937, -942, -946, -950, -953, -957, -960, -964, -967, -970, -973, -976, -978,
    -981, -983, -985, -987, -989, -991, -992, -994, -995, -996, -997, -998, -999, -999, -1000, -1000,
    -1000, -1000, -1000, -999, -999, -998, -997, -996, -995, -994, -992, -991, -989, -987, -985, -983,
    -981, -978, -976, -973, -970, -967, -964, -960, -957, -953, -950, -946, -942, -937, -933, -929,
    -924, -919, -914, -909, -904, -899, -893, -888, -882, -876, -870, -864, -858, -851, -845, -838,
    -831, -825, -818, -810, -803, -796, -788, -781, -773, -765, -757, -749, -741, -733, -724, -716,
    -707, -698, -690, -681, -672, -662, -653, -644, -634, -625, -615, -606, -596, -586, -576, -566,
    -556, -545, -535, -525, -514, -504, -493, -482, -471, -461, -450, -439, -428, -416, -405, -394,
    -383, -371, -360, -348, -337, -325, -314, -302, -290, -279, -267, -255, -243, -231, -219, -207,
    -195, -183, -171, -159, -147, -135, -122, -110, -98, -86, -74, -61, -49, -37, -25, -12,
    0, 12, 25, 37, 49, 61, 74, 86, 98, 110, 122, 135, 147, 159, 171, 183,
    195, 207, 219, 231, 243, 255, 267, 279, 290, 302, 314, 325, 337, 348, 360, 371,
    383, 394, 405, 416, 428, 439, 450, 461, 471, 482, 493, 504, 514, 525, 535, 545,
    556, 566, 576, 586, 596, 606, 615, 625, 634, 644, 653, 662, 672, 681, 690, 698,
    707, 716, 724, 733, 741, 749, 757, 765, 773, 781, 788, 796, 803, 810, 818, 825,
    831, 838, 845, 851, 858, 864, 870, 876, 882, 888, 893, 899, 904, 909, 914, 919,
    924, 929, 933, 937, 942, 946, 950, 953, 957, 960, 964, 967, 970, 973, 976, 978,
    981, 983, 985, 987, 989, 991, 992, 994, 995, 996, 997, 998, 999, 999, 1000, 1000,
];

pub(crate) static SIN_512: [i16; 512] = [
    0, 12, 25, 37, 49, 61, 74, 86, 98, 110, 122, 135, 147, 159, 171, 183,
    195, 207, 219, 231, 243, 255, 267, 279, 290, 302, 314, 325, 337, 348, 360, 371,
    383, 394, 405, 416, 428, 439, 450, 461, 471, 482, 493, 504, 514, 525, 535, 545,
    556, 566, 576, 586, 596, 606, 615, 625, 634, 644, 653, 662, 672, 681, 690, 698,
    707, 716, 724, 733, 741, 749, 757, 765, 773, 781, 788, 796, 803, 810, 818, 825,
    831, 838, 845, 851, 858, 864, 870, 876, 882, 888, 893, 899, 904, 909, 914, 919,
    924, 929, 933, 937, 942, 946, 950, 953, 957, 960, 964, 967, 970, 973, 976, 978,
    981, 983, 985, 987, 989, 991, 992, 994, 995, 996, 997, 998, 999, 999, 1000, 1000,
    1000, 1000, 1000, 999, 999, 998, 997, 996, 995, 994, 992, 991, 989, 987, 985, 983,
    981, 978, 976, 973, 970, 967, 964, 960, 957, 953, 950, 946, 942, 937, 933, 929,
    924, 919, 914, 909, 904, 899, 893, 888, 882, 876, 870, 864, 858, 851, 845, 838,
    831, 825, 818, 810, 803, 796, 788, 781, 773, 765, 757, 749, 741, 733, 724, 716,
    707, 698, 690, 681, 672, 662, 653, 644, 634, 625, 615, 606, 596, 586, 576, 566,
    556, 545, 535, 525, 514, 504, 493, 482, 471, 461, 450, 439, 428, 416, 405, 394,
    383, 371, 360, 348, 337, 325, 314, 302, 290, 279, 267, 255, 243, 231, 219, 207,
    195, 183, 171, 159, 147, 135, 122, 110, 98, 86, 74, 61, 49, 37, 25, 12,
    0, -12, -25, -37, -49, -61, -74, -86, -98, -110, -122, -135, -147, -159, -171, -183,
    -195, -207, -219, -231, -243, -255, -267, -279, -290, -302, -314, -325, -337, -348, -360, -371,
    -383, -394, -405, -416, -428, -439, -450, -461, -471, -482, -493, -504, -514, -525, -535, -545,
    -556, -566, -576, -586, -596, -606, -615, -625, -634, -644, -653, -662, -672, -681, -690, -698,
    -707, -716, -724, -733, -741, -749, -757, -765, -773, -781, -788, -796, -803, -810, -818, -825,
    -831, -838, -845, -851, -858, -864, -870, -876, -882, -888, -893, -899, -904, -909, -914, -919,
    -924, -929, -933, -937, -942, -946, -950, -953, -957, -960, -964, -967, -970, -973, -976, -978,
    -981, -983, -985, -987, -989, -991, -992, -994, -995, -996, -997, -998, -999, -999, -1000, -1000,
    -1000, -1000, -1000, -999, -999, -998, -997, -996, -995, -994, -992, -991, -989, -987, -985, -983,
    -981, -978, -976, -973, -970, -967, -964, -960, -957, -953, -950, -946, -942, -937, -933, -929,
    -924, -919, -914, -909, -904, -899, -893, -888, -882, -876, -870, -864, -858, -851, -845, -838,
    -831, -825, -818, -810, -803, -796, -788, -781, -773, -765, -757, -749, -741, -733, -724, -716,
    -707, -698, -690, -681, -672, -662, -653, -644, -634, -625, -615, -606, -596, -586, -576, -566,
    -556, -545, -535, -525, -514, -504, -493, -482, -471, -461, -450, -439, -428, -416, -405, -394,
    -383, -371, -360, -348, -337, -325, -314, -302, -290, -279, -267, -255, -243, -231, -219, -207,
    -195, -183, -171, -159, -147, -135, -122, -110, -98, -86, -74, -61, -49, -37, -25, -12,
];
