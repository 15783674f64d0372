//! Built-in EBCDIC tables

/// The byte that carries the euro sign in the euro variants (1140, 1141, 1148)
pub const EURO_BYTE: u8 = 0x9F;

/// EBCDIC code page 037 (USA/Canada)
pub const CP037: [char; 256] = [
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', // 0x00
    '\u{009C}', '\u{0009}', '\u{0086}', '\u{007F}', // 0x04
    '\u{0097}', '\u{008D}', '\u{008E}', '\u{000B}', // 0x08
    '\u{000C}', '\u{000D}', '\u{000E}', '\u{000F}', // 0x0C
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', // 0x10
    '\u{009D}', '\u{0085}', '\u{0008}', '\u{0087}', // 0x14
    '\u{0018}', '\u{0019}', '\u{0092}', '\u{008F}', // 0x18
    '\u{001C}', '\u{001D}', '\u{001E}', '\u{001F}', // 0x1C
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', // 0x20
    '\u{0084}', '\u{000A}', '\u{0017}', '\u{001B}', // 0x24
    '\u{0088}', '\u{0089}', '\u{008A}', '\u{008B}', // 0x28
    '\u{008C}', '\u{0005}', '\u{0006}', '\u{0007}', // 0x2C
    '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', // 0x30
    '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}', // 0x34
    '\u{0098}', '\u{0099}', '\u{009A}', '\u{009B}', // 0x38
    '\u{0014}', '\u{0015}', '\u{009E}', '\u{001A}', // 0x3C
    '\u{0020}', '\u{00A0}', '\u{00E2}', '\u{00E4}', // 0x40
    '\u{00E0}', '\u{00E1}', '\u{00E3}', '\u{00E5}', // 0x44
    '\u{00E7}', '\u{00F1}', '\u{00A2}', '\u{002E}', // 0x48
    '\u{003C}', '\u{0028}', '\u{002B}', '\u{007C}', // 0x4C
    '\u{0026}', '\u{00E9}', '\u{00EA}', '\u{00EB}', // 0x50
    '\u{00E8}', '\u{00ED}', '\u{00EE}', '\u{00EF}', // 0x54
    '\u{00EC}', '\u{00DF}', '\u{0021}', '\u{0024}', // 0x58
    '\u{002A}', '\u{0029}', '\u{003B}', '\u{00AC}', // 0x5C
    '\u{002D}', '\u{002F}', '\u{00C2}', '\u{00C4}', // 0x60
    '\u{00C0}', '\u{00C1}', '\u{00C3}', '\u{00C5}', // 0x64
    '\u{00C7}', '\u{00D1}', '\u{00A6}', '\u{002C}', // 0x68
    '\u{0025}', '\u{005F}', '\u{003E}', '\u{003F}', // 0x6C
    '\u{00F8}', '\u{00C9}', '\u{00CA}', '\u{00CB}', // 0x70
    '\u{00C8}', '\u{00CD}', '\u{00CE}', '\u{00CF}', // 0x74
    '\u{00CC}', '\u{0060}', '\u{003A}', '\u{0023}', // 0x78
    '\u{0040}', '\u{0027}', '\u{003D}', '\u{0022}', // 0x7C
    '\u{00D8}', '\u{0061}', '\u{0062}', '\u{0063}', // 0x80
    '\u{0064}', '\u{0065}', '\u{0066}', '\u{0067}', // 0x84
    '\u{0068}', '\u{0069}', '\u{00AB}', '\u{00BB}', // 0x88
    '\u{00F0}', '\u{00FD}', '\u{00FE}', '\u{00B1}', // 0x8C
    '\u{00B0}', '\u{006A}', '\u{006B}', '\u{006C}', // 0x90
    '\u{006D}', '\u{006E}', '\u{006F}', '\u{0070}', // 0x94
    '\u{0071}', '\u{0072}', '\u{00AA}', '\u{00BA}', // 0x98
    '\u{00E6}', '\u{00B8}', '\u{00C6}', '\u{00A4}', // 0x9C
    '\u{00B5}', '\u{007E}', '\u{0073}', '\u{0074}', // 0xA0
    '\u{0075}', '\u{0076}', '\u{0077}', '\u{0078}', // 0xA4
    '\u{0079}', '\u{007A}', '\u{00A1}', '\u{00BF}', // 0xA8
    '\u{00D0}', '\u{00DD}', '\u{00DE}', '\u{00AE}', // 0xAC
    '\u{005E}', '\u{00A3}', '\u{00A5}', '\u{00B7}', // 0xB0
    '\u{00A9}', '\u{00A7}', '\u{00B6}', '\u{00BC}', // 0xB4
    '\u{00BD}', '\u{00BE}', '\u{005B}', '\u{005D}', // 0xB8
    '\u{00AF}', '\u{00A8}', '\u{00B4}', '\u{00D7}', // 0xBC
    '\u{007B}', '\u{0041}', '\u{0042}', '\u{0043}', // 0xC0
    '\u{0044}', '\u{0045}', '\u{0046}', '\u{0047}', // 0xC4
    '\u{0048}', '\u{0049}', '\u{00AD}', '\u{00F4}', // 0xC8
    '\u{00F6}', '\u{00F2}', '\u{00F3}', '\u{00F5}', // 0xCC
    '\u{007D}', '\u{004A}', '\u{004B}', '\u{004C}', // 0xD0
    '\u{004D}', '\u{004E}', '\u{004F}', '\u{0050}', // 0xD4
    '\u{0051}', '\u{0052}', '\u{00B9}', '\u{00FB}', // 0xD8
    '\u{00FC}', '\u{00F9}', '\u{00FA}', '\u{00FF}', // 0xDC
    '\u{005C}', '\u{00F7}', '\u{0053}', '\u{0054}', // 0xE0
    '\u{0055}', '\u{0056}', '\u{0057}', '\u{0058}', // 0xE4
    '\u{0059}', '\u{005A}', '\u{00B2}', '\u{00D4}', // 0xE8
    '\u{00D6}', '\u{00D2}', '\u{00D3}', '\u{00D5}', // 0xEC
    '\u{0030}', '\u{0031}', '\u{0032}', '\u{0033}', // 0xF0
    '\u{0034}', '\u{0035}', '\u{0036}', '\u{0037}', // 0xF4
    '\u{0038}', '\u{0039}', '\u{00B3}', '\u{00DB}', // 0xF8
    '\u{00DC}', '\u{00D9}', '\u{00DA}', '\u{009F}', // 0xFC
];

/// EBCDIC code page 273 (Germany/Austria)
pub const CP273: [char; 256] = [
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', // 0x00
    '\u{009C}', '\u{0009}', '\u{0086}', '\u{007F}', // 0x04
    '\u{0097}', '\u{008D}', '\u{008E}', '\u{000B}', // 0x08
    '\u{000C}', '\u{000D}', '\u{000E}', '\u{000F}', // 0x0C
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', // 0x10
    '\u{009D}', '\u{0085}', '\u{0008}', '\u{0087}', // 0x14
    '\u{0018}', '\u{0019}', '\u{0092}', '\u{008F}', // 0x18
    '\u{001C}', '\u{001D}', '\u{001E}', '\u{001F}', // 0x1C
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', // 0x20
    '\u{0084}', '\u{000A}', '\u{0017}', '\u{001B}', // 0x24
    '\u{0088}', '\u{0089}', '\u{008A}', '\u{008B}', // 0x28
    '\u{008C}', '\u{0005}', '\u{0006}', '\u{0007}', // 0x2C
    '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', // 0x30
    '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}', // 0x34
    '\u{0098}', '\u{0099}', '\u{009A}', '\u{009B}', // 0x38
    '\u{0014}', '\u{0015}', '\u{009E}', '\u{001A}', // 0x3C
    '\u{0020}', '\u{00A0}', '\u{00E2}', '\u{007B}', // 0x40
    '\u{00E0}', '\u{00E1}', '\u{00E3}', '\u{00E5}', // 0x44
    '\u{00E7}', '\u{00F1}', '\u{00C4}', '\u{002E}', // 0x48
    '\u{003C}', '\u{0028}', '\u{002B}', '\u{0021}', // 0x4C
    '\u{0026}', '\u{00E9}', '\u{00EA}', '\u{00EB}', // 0x50
    '\u{00E8}', '\u{00ED}', '\u{00EE}', '\u{00EF}', // 0x54
    '\u{00EC}', '\u{007E}', '\u{00DC}', '\u{0024}', // 0x58
    '\u{002A}', '\u{0029}', '\u{003B}', '\u{005E}', // 0x5C
    '\u{002D}', '\u{002F}', '\u{00C2}', '\u{005B}', // 0x60
    '\u{00C0}', '\u{00C1}', '\u{00C3}', '\u{00C5}', // 0x64
    '\u{00C7}', '\u{00D1}', '\u{00F6}', '\u{002C}', // 0x68
    '\u{0025}', '\u{005F}', '\u{003E}', '\u{003F}', // 0x6C
    '\u{00F8}', '\u{00C9}', '\u{00CA}', '\u{00CB}', // 0x70
    '\u{00C8}', '\u{00CD}', '\u{00CE}', '\u{00CF}', // 0x74
    '\u{00CC}', '\u{0060}', '\u{003A}', '\u{0023}', // 0x78
    '\u{00A7}', '\u{0027}', '\u{003D}', '\u{0022}', // 0x7C
    '\u{00D8}', '\u{0061}', '\u{0062}', '\u{0063}', // 0x80
    '\u{0064}', '\u{0065}', '\u{0066}', '\u{0067}', // 0x84
    '\u{0068}', '\u{0069}', '\u{00AB}', '\u{00BB}', // 0x88
    '\u{00F0}', '\u{00FD}', '\u{00FE}', '\u{00B1}', // 0x8C
    '\u{00B0}', '\u{006A}', '\u{006B}', '\u{006C}', // 0x90
    '\u{006D}', '\u{006E}', '\u{006F}', '\u{0070}', // 0x94
    '\u{0071}', '\u{0072}', '\u{00AA}', '\u{00BA}', // 0x98
    '\u{00E6}', '\u{00B8}', '\u{00C6}', '\u{00A4}', // 0x9C
    '\u{00B5}', '\u{00DF}', '\u{0073}', '\u{0074}', // 0xA0
    '\u{0075}', '\u{0076}', '\u{0077}', '\u{0078}', // 0xA4
    '\u{0079}', '\u{007A}', '\u{00A1}', '\u{00BF}', // 0xA8
    '\u{00D0}', '\u{00DD}', '\u{00DE}', '\u{00AE}', // 0xAC
    '\u{00A2}', '\u{00A3}', '\u{00A5}', '\u{00B7}', // 0xB0
    '\u{00A9}', '\u{0040}', '\u{00B6}', '\u{00BC}', // 0xB4
    '\u{00BD}', '\u{00BE}', '\u{00AC}', '\u{007C}', // 0xB8
    '\u{203E}', '\u{00A8}', '\u{00B4}', '\u{00D7}', // 0xBC
    '\u{00E4}', '\u{0041}', '\u{0042}', '\u{0043}', // 0xC0
    '\u{0044}', '\u{0045}', '\u{0046}', '\u{0047}', // 0xC4
    '\u{0048}', '\u{0049}', '\u{00AD}', '\u{00F4}', // 0xC8
    '\u{00A6}', '\u{00F2}', '\u{00F3}', '\u{00F5}', // 0xCC
    '\u{00FC}', '\u{004A}', '\u{004B}', '\u{004C}', // 0xD0
    '\u{004D}', '\u{004E}', '\u{004F}', '\u{0050}', // 0xD4
    '\u{0051}', '\u{0052}', '\u{00B9}', '\u{00FB}', // 0xD8
    '\u{007D}', '\u{00F9}', '\u{00FA}', '\u{00FF}', // 0xDC
    '\u{00D6}', '\u{00F7}', '\u{0053}', '\u{0054}', // 0xE0
    '\u{0055}', '\u{0056}', '\u{0057}', '\u{0058}', // 0xE4
    '\u{0059}', '\u{005A}', '\u{00B2}', '\u{00D4}', // 0xE8
    '\u{005C}', '\u{00D2}', '\u{00D3}', '\u{00D5}', // 0xEC
    '\u{0030}', '\u{0031}', '\u{0032}', '\u{0033}', // 0xF0
    '\u{0034}', '\u{0035}', '\u{0036}', '\u{0037}', // 0xF4
    '\u{0038}', '\u{0039}', '\u{00B3}', '\u{00DB}', // 0xF8
    '\u{005D}', '\u{00D9}', '\u{00DA}', '\u{009F}', // 0xFC
];

/// EBCDIC code page 500 (International)
pub const CP500: [char; 256] = [
    '\u{0000}', '\u{0001}', '\u{0002}', '\u{0003}', // 0x00
    '\u{009C}', '\u{0009}', '\u{0086}', '\u{007F}', // 0x04
    '\u{0097}', '\u{008D}', '\u{008E}', '\u{000B}', // 0x08
    '\u{000C}', '\u{000D}', '\u{000E}', '\u{000F}', // 0x0C
    '\u{0010}', '\u{0011}', '\u{0012}', '\u{0013}', // 0x10
    '\u{009D}', '\u{0085}', '\u{0008}', '\u{0087}', // 0x14
    '\u{0018}', '\u{0019}', '\u{0092}', '\u{008F}', // 0x18
    '\u{001C}', '\u{001D}', '\u{001E}', '\u{001F}', // 0x1C
    '\u{0080}', '\u{0081}', '\u{0082}', '\u{0083}', // 0x20
    '\u{0084}', '\u{000A}', '\u{0017}', '\u{001B}', // 0x24
    '\u{0088}', '\u{0089}', '\u{008A}', '\u{008B}', // 0x28
    '\u{008C}', '\u{0005}', '\u{0006}', '\u{0007}', // 0x2C
    '\u{0090}', '\u{0091}', '\u{0016}', '\u{0093}', // 0x30
    '\u{0094}', '\u{0095}', '\u{0096}', '\u{0004}', // 0x34
    '\u{0098}', '\u{0099}', '\u{009A}', '\u{009B}', // 0x38
    '\u{0014}', '\u{0015}', '\u{009E}', '\u{001A}', // 0x3C
    '\u{0020}', '\u{00A0}', '\u{00E2}', '\u{00E4}', // 0x40
    '\u{00E0}', '\u{00E1}', '\u{00E3}', '\u{00E5}', // 0x44
    '\u{00E7}', '\u{00F1}', '\u{005B}', '\u{002E}', // 0x48
    '\u{003C}', '\u{0028}', '\u{002B}', '\u{0021}', // 0x4C
    '\u{0026}', '\u{00E9}', '\u{00EA}', '\u{00EB}', // 0x50
    '\u{00E8}', '\u{00ED}', '\u{00EE}', '\u{00EF}', // 0x54
    '\u{00EC}', '\u{00DF}', '\u{005D}', '\u{0024}', // 0x58
    '\u{002A}', '\u{0029}', '\u{003B}', '\u{005E}', // 0x5C
    '\u{002D}', '\u{002F}', '\u{00C2}', '\u{00C4}', // 0x60
    '\u{00C0}', '\u{00C1}', '\u{00C3}', '\u{00C5}', // 0x64
    '\u{00C7}', '\u{00D1}', '\u{00A6}', '\u{002C}', // 0x68
    '\u{0025}', '\u{005F}', '\u{003E}', '\u{003F}', // 0x6C
    '\u{00F8}', '\u{00C9}', '\u{00CA}', '\u{00CB}', // 0x70
    '\u{00C8}', '\u{00CD}', '\u{00CE}', '\u{00CF}', // 0x74
    '\u{00CC}', '\u{0060}', '\u{003A}', '\u{0023}', // 0x78
    '\u{0040}', '\u{0027}', '\u{003D}', '\u{0022}', // 0x7C
    '\u{00D8}', '\u{0061}', '\u{0062}', '\u{0063}', // 0x80
    '\u{0064}', '\u{0065}', '\u{0066}', '\u{0067}', // 0x84
    '\u{0068}', '\u{0069}', '\u{00AB}', '\u{00BB}', // 0x88
    '\u{00F0}', '\u{00FD}', '\u{00FE}', '\u{00B1}', // 0x8C
    '\u{00B0}', '\u{006A}', '\u{006B}', '\u{006C}', // 0x90
    '\u{006D}', '\u{006E}', '\u{006F}', '\u{0070}', // 0x94
    '\u{0071}', '\u{0072}', '\u{00AA}', '\u{00BA}', // 0x98
    '\u{00E6}', '\u{00B8}', '\u{00C6}', '\u{00A4}', // 0x9C
    '\u{00B5}', '\u{007E}', '\u{0073}', '\u{0074}', // 0xA0
    '\u{0075}', '\u{0076}', '\u{0077}', '\u{0078}', // 0xA4
    '\u{0079}', '\u{007A}', '\u{00A1}', '\u{00BF}', // 0xA8
    '\u{00D0}', '\u{00DD}', '\u{00DE}', '\u{00AE}', // 0xAC
    '\u{00A2}', '\u{00A3}', '\u{00A5}', '\u{00B7}', // 0xB0
    '\u{00A9}', '\u{00A7}', '\u{00B6}', '\u{00BC}', // 0xB4
    '\u{00BD}', '\u{00BE}', '\u{00AC}', '\u{007C}', // 0xB8
    '\u{00AF}', '\u{00A8}', '\u{00B4}', '\u{00D7}', // 0xBC
    '\u{007B}', '\u{0041}', '\u{0042}', '\u{0043}', // 0xC0
    '\u{0044}', '\u{0045}', '\u{0046}', '\u{0047}', // 0xC4
    '\u{0048}', '\u{0049}', '\u{00AD}', '\u{00F4}', // 0xC8
    '\u{00F6}', '\u{00F2}', '\u{00F3}', '\u{00F5}', // 0xCC
    '\u{007D}', '\u{004A}', '\u{004B}', '\u{004C}', // 0xD0
    '\u{004D}', '\u{004E}', '\u{004F}', '\u{0050}', // 0xD4
    '\u{0051}', '\u{0052}', '\u{00B9}', '\u{00FB}', // 0xD8
    '\u{00FC}', '\u{00F9}', '\u{00FA}', '\u{00FF}', // 0xDC
    '\u{005C}', '\u{00F7}', '\u{0053}', '\u{0054}', // 0xE0
    '\u{0055}', '\u{0056}', '\u{0057}', '\u{0058}', // 0xE4
    '\u{0059}', '\u{005A}', '\u{00B2}', '\u{00D4}', // 0xE8
    '\u{00D6}', '\u{00D2}', '\u{00D3}', '\u{00D5}', // 0xEC
    '\u{0030}', '\u{0031}', '\u{0032}', '\u{0033}', // 0xF0
    '\u{0034}', '\u{0035}', '\u{0036}', '\u{0037}', // 0xF4
    '\u{0038}', '\u{0039}', '\u{00B3}', '\u{00DB}', // 0xF8
    '\u{00DC}', '\u{00D9}', '\u{00DA}', '\u{009F}', // 0xFC
];
