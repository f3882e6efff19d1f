//! Opcode constants and the per-opcode metadata table.

use crate::Format;

// Unused opcode values (0x3e..=0x43, 0x73, 0x79..=0x7a, 0xe3..=0xff) have no
// constant and no table entry.

pub const NOP: u8 = 0x00;
pub const MOVE: u8 = 0x01;
pub const MOVE_FROM16: u8 = 0x02;
pub const MOVE_16: u8 = 0x03;
pub const MOVE_WIDE: u8 = 0x04;
pub const MOVE_WIDE_FROM16: u8 = 0x05;
pub const MOVE_WIDE_16: u8 = 0x06;
pub const MOVE_OBJECT: u8 = 0x07;
pub const MOVE_OBJECT_FROM16: u8 = 0x08;
pub const MOVE_OBJECT_16: u8 = 0x09;
pub const MOVE_RESULT: u8 = 0x0a;
pub const MOVE_RESULT_WIDE: u8 = 0x0b;
pub const MOVE_RESULT_OBJECT: u8 = 0x0c;
pub const MOVE_EXCEPTION: u8 = 0x0d;
pub const RETURN_VOID: u8 = 0x0e;
pub const RETURN: u8 = 0x0f;
pub const RETURN_WIDE: u8 = 0x10;
pub const RETURN_OBJECT: u8 = 0x11;
pub const CONST_4: u8 = 0x12;
pub const CONST_16: u8 = 0x13;
pub const CONST: u8 = 0x14;
pub const CONST_HIGH16: u8 = 0x15;
pub const CONST_WIDE_16: u8 = 0x16;
pub const CONST_WIDE_32: u8 = 0x17;
pub const CONST_WIDE: u8 = 0x18;
pub const CONST_WIDE_HIGH16: u8 = 0x19;
pub const CONST_STRING: u8 = 0x1a;
pub const CONST_STRING_JUMBO: u8 = 0x1b;
pub const CONST_CLASS: u8 = 0x1c;
pub const MONITOR_ENTER: u8 = 0x1d;
pub const MONITOR_EXIT: u8 = 0x1e;
pub const CHECK_CAST: u8 = 0x1f;
pub const INSTANCE_OF: u8 = 0x20;
pub const ARRAY_LENGTH: u8 = 0x21;
pub const NEW_INSTANCE: u8 = 0x22;
pub const NEW_ARRAY: u8 = 0x23;
pub const FILLED_NEW_ARRAY: u8 = 0x24;
pub const FILLED_NEW_ARRAY_RANGE: u8 = 0x25;
pub const FILL_ARRAY_DATA: u8 = 0x26;
pub const THROW: u8 = 0x27;
pub const GOTO: u8 = 0x28;
pub const GOTO_16: u8 = 0x29;
pub const GOTO_32: u8 = 0x2a;
pub const PACKED_SWITCH: u8 = 0x2b;
pub const SPARSE_SWITCH: u8 = 0x2c;
pub const CMPL_FLOAT: u8 = 0x2d;
pub const CMPG_FLOAT: u8 = 0x2e;
pub const CMPL_DOUBLE: u8 = 0x2f;
pub const CMPG_DOUBLE: u8 = 0x30;
pub const CMP_LONG: u8 = 0x31;
pub const IF_EQ: u8 = 0x32;
pub const IF_NE: u8 = 0x33;
pub const IF_LT: u8 = 0x34;
pub const IF_GE: u8 = 0x35;
pub const IF_GT: u8 = 0x36;
pub const IF_LE: u8 = 0x37;
pub const IF_EQZ: u8 = 0x38;
pub const IF_NEZ: u8 = 0x39;
pub const IF_LTZ: u8 = 0x3a;
pub const IF_GEZ: u8 = 0x3b;
pub const IF_GTZ: u8 = 0x3c;
pub const IF_LEZ: u8 = 0x3d;
pub const AGET: u8 = 0x44;
pub const AGET_WIDE: u8 = 0x45;
pub const AGET_OBJECT: u8 = 0x46;
pub const AGET_BOOLEAN: u8 = 0x47;
pub const AGET_BYTE: u8 = 0x48;
pub const AGET_CHAR: u8 = 0x49;
pub const AGET_SHORT: u8 = 0x4a;
pub const APUT: u8 = 0x4b;
pub const APUT_WIDE: u8 = 0x4c;
pub const APUT_OBJECT: u8 = 0x4d;
pub const APUT_BOOLEAN: u8 = 0x4e;
pub const APUT_BYTE: u8 = 0x4f;
pub const APUT_CHAR: u8 = 0x50;
pub const APUT_SHORT: u8 = 0x51;
pub const IGET: u8 = 0x52;
pub const IGET_WIDE: u8 = 0x53;
pub const IGET_OBJECT: u8 = 0x54;
pub const IGET_BOOLEAN: u8 = 0x55;
pub const IGET_BYTE: u8 = 0x56;
pub const IGET_CHAR: u8 = 0x57;
pub const IGET_SHORT: u8 = 0x58;
pub const IPUT: u8 = 0x59;
pub const IPUT_WIDE: u8 = 0x5a;
pub const IPUT_OBJECT: u8 = 0x5b;
pub const IPUT_BOOLEAN: u8 = 0x5c;
pub const IPUT_BYTE: u8 = 0x5d;
pub const IPUT_CHAR: u8 = 0x5e;
pub const IPUT_SHORT: u8 = 0x5f;
pub const SGET: u8 = 0x60;
pub const SGET_WIDE: u8 = 0x61;
pub const SGET_OBJECT: u8 = 0x62;
pub const SGET_BOOLEAN: u8 = 0x63;
pub const SGET_BYTE: u8 = 0x64;
pub const SGET_CHAR: u8 = 0x65;
pub const SGET_SHORT: u8 = 0x66;
pub const SPUT: u8 = 0x67;
pub const SPUT_WIDE: u8 = 0x68;
pub const SPUT_OBJECT: u8 = 0x69;
pub const SPUT_BOOLEAN: u8 = 0x6a;
pub const SPUT_BYTE: u8 = 0x6b;
pub const SPUT_CHAR: u8 = 0x6c;
pub const SPUT_SHORT: u8 = 0x6d;
pub const INVOKE_VIRTUAL: u8 = 0x6e;
pub const INVOKE_SUPER: u8 = 0x6f;
pub const INVOKE_DIRECT: u8 = 0x70;
pub const INVOKE_STATIC: u8 = 0x71;
pub const INVOKE_INTERFACE: u8 = 0x72;
pub const INVOKE_VIRTUAL_RANGE: u8 = 0x74;
pub const INVOKE_SUPER_RANGE: u8 = 0x75;
pub const INVOKE_DIRECT_RANGE: u8 = 0x76;
pub const INVOKE_STATIC_RANGE: u8 = 0x77;
pub const INVOKE_INTERFACE_RANGE: u8 = 0x78;
pub const NEG_INT: u8 = 0x7b;
pub const NOT_INT: u8 = 0x7c;
pub const NEG_LONG: u8 = 0x7d;
pub const NOT_LONG: u8 = 0x7e;
pub const NEG_FLOAT: u8 = 0x7f;
pub const NEG_DOUBLE: u8 = 0x80;
pub const INT_TO_LONG: u8 = 0x81;
pub const INT_TO_FLOAT: u8 = 0x82;
pub const INT_TO_DOUBLE: u8 = 0x83;
pub const LONG_TO_INT: u8 = 0x84;
pub const LONG_TO_FLOAT: u8 = 0x85;
pub const LONG_TO_DOUBLE: u8 = 0x86;
pub const FLOAT_TO_INT: u8 = 0x87;
pub const FLOAT_TO_LONG: u8 = 0x88;
pub const FLOAT_TO_DOUBLE: u8 = 0x89;
pub const DOUBLE_TO_INT: u8 = 0x8a;
pub const DOUBLE_TO_LONG: u8 = 0x8b;
pub const DOUBLE_TO_FLOAT: u8 = 0x8c;
pub const INT_TO_BYTE: u8 = 0x8d;
pub const INT_TO_CHAR: u8 = 0x8e;
pub const INT_TO_SHORT: u8 = 0x8f;
pub const ADD_INT: u8 = 0x90;
pub const SUB_INT: u8 = 0x91;
pub const MUL_INT: u8 = 0x92;
pub const DIV_INT: u8 = 0x93;
pub const REM_INT: u8 = 0x94;
pub const AND_INT: u8 = 0x95;
pub const OR_INT: u8 = 0x96;
pub const XOR_INT: u8 = 0x97;
pub const SHL_INT: u8 = 0x98;
pub const SHR_INT: u8 = 0x99;
pub const USHR_INT: u8 = 0x9a;
pub const ADD_LONG: u8 = 0x9b;
pub const SUB_LONG: u8 = 0x9c;
pub const MUL_LONG: u8 = 0x9d;
pub const DIV_LONG: u8 = 0x9e;
pub const REM_LONG: u8 = 0x9f;
pub const AND_LONG: u8 = 0xa0;
pub const OR_LONG: u8 = 0xa1;
pub const XOR_LONG: u8 = 0xa2;
pub const SHL_LONG: u8 = 0xa3;
pub const SHR_LONG: u8 = 0xa4;
pub const USHR_LONG: u8 = 0xa5;
pub const ADD_FLOAT: u8 = 0xa6;
pub const SUB_FLOAT: u8 = 0xa7;
pub const MUL_FLOAT: u8 = 0xa8;
pub const DIV_FLOAT: u8 = 0xa9;
pub const REM_FLOAT: u8 = 0xaa;
pub const ADD_DOUBLE: u8 = 0xab;
pub const SUB_DOUBLE: u8 = 0xac;
pub const MUL_DOUBLE: u8 = 0xad;
pub const DIV_DOUBLE: u8 = 0xae;
pub const REM_DOUBLE: u8 = 0xaf;
pub const ADD_INT_2ADDR: u8 = 0xb0;
pub const SUB_INT_2ADDR: u8 = 0xb1;
pub const MUL_INT_2ADDR: u8 = 0xb2;
pub const DIV_INT_2ADDR: u8 = 0xb3;
pub const REM_INT_2ADDR: u8 = 0xb4;
pub const AND_INT_2ADDR: u8 = 0xb5;
pub const OR_INT_2ADDR: u8 = 0xb6;
pub const XOR_INT_2ADDR: u8 = 0xb7;
pub const SHL_INT_2ADDR: u8 = 0xb8;
pub const SHR_INT_2ADDR: u8 = 0xb9;
pub const USHR_INT_2ADDR: u8 = 0xba;
pub const ADD_LONG_2ADDR: u8 = 0xbb;
pub const SUB_LONG_2ADDR: u8 = 0xbc;
pub const MUL_LONG_2ADDR: u8 = 0xbd;
pub const DIV_LONG_2ADDR: u8 = 0xbe;
pub const REM_LONG_2ADDR: u8 = 0xbf;
pub const AND_LONG_2ADDR: u8 = 0xc0;
pub const OR_LONG_2ADDR: u8 = 0xc1;
pub const XOR_LONG_2ADDR: u8 = 0xc2;
pub const SHL_LONG_2ADDR: u8 = 0xc3;
pub const SHR_LONG_2ADDR: u8 = 0xc4;
pub const USHR_LONG_2ADDR: u8 = 0xc5;
pub const ADD_FLOAT_2ADDR: u8 = 0xc6;
pub const SUB_FLOAT_2ADDR: u8 = 0xc7;
pub const MUL_FLOAT_2ADDR: u8 = 0xc8;
pub const DIV_FLOAT_2ADDR: u8 = 0xc9;
pub const REM_FLOAT_2ADDR: u8 = 0xca;
pub const ADD_DOUBLE_2ADDR: u8 = 0xcb;
pub const SUB_DOUBLE_2ADDR: u8 = 0xcc;
pub const MUL_DOUBLE_2ADDR: u8 = 0xcd;
pub const DIV_DOUBLE_2ADDR: u8 = 0xce;
pub const REM_DOUBLE_2ADDR: u8 = 0xcf;
pub const ADD_INT_LIT16: u8 = 0xd0;
pub const RSUB_INT: u8 = 0xd1;
pub const MUL_INT_LIT16: u8 = 0xd2;
pub const DIV_INT_LIT16: u8 = 0xd3;
pub const REM_INT_LIT16: u8 = 0xd4;
pub const AND_INT_LIT16: u8 = 0xd5;
pub const OR_INT_LIT16: u8 = 0xd6;
pub const XOR_INT_LIT16: u8 = 0xd7;
pub const ADD_INT_LIT8: u8 = 0xd8;
pub const RSUB_INT_LIT8: u8 = 0xd9;
pub const MUL_INT_LIT8: u8 = 0xda;
pub const DIV_INT_LIT8: u8 = 0xdb;
pub const REM_INT_LIT8: u8 = 0xdc;
pub const AND_INT_LIT8: u8 = 0xdd;
pub const OR_INT_LIT8: u8 = 0xde;
pub const XOR_INT_LIT8: u8 = 0xdf;
pub const SHL_INT_LIT8: u8 = 0xe0;
pub const SHR_INT_LIT8: u8 = 0xe1;
pub const USHR_INT_LIT8: u8 = 0xe2;

/// Static description of one opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpcodeInfo {
    opcode: u8,
    mnemonic: &'static str,
    format: Format,
}

impl OpcodeInfo {
    /// Raw opcode value (the low byte of the first code unit).
    #[inline]
    pub const fn opcode(&self) -> u8 {
        self.opcode
    }

    #[inline]
    pub const fn mnemonic(&self) -> &'static str {
        self.mnemonic
    }

    #[inline]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Instruction size in code units.
    #[inline]
    pub const fn size(&self) -> usize {
        self.format.size()
    }
}

const fn info(opcode: u8, mnemonic: &'static str, format: Format) -> OpcodeInfo {
    OpcodeInfo {
        opcode,
        mnemonic,
        format,
    }
}

const OPCODE_LIST: [OpcodeInfo; 218] = [
    info(NOP, "nop", Format::F10x),
    info(MOVE, "move", Format::F12x),
    info(MOVE_FROM16, "move/from16", Format::F22x),
    info(MOVE_16, "move/16", Format::F32x),
    info(MOVE_WIDE, "move-wide", Format::F12x),
    info(MOVE_WIDE_FROM16, "move-wide/from16", Format::F22x),
    info(MOVE_WIDE_16, "move-wide/16", Format::F32x),
    info(MOVE_OBJECT, "move-object", Format::F12x),
    info(MOVE_OBJECT_FROM16, "move-object/from16", Format::F22x),
    info(MOVE_OBJECT_16, "move-object/16", Format::F32x),
    info(MOVE_RESULT, "move-result", Format::F11x),
    info(MOVE_RESULT_WIDE, "move-result-wide", Format::F11x),
    info(MOVE_RESULT_OBJECT, "move-result-object", Format::F11x),
    info(MOVE_EXCEPTION, "move-exception", Format::F11x),
    info(RETURN_VOID, "return-void", Format::F10x),
    info(RETURN, "return", Format::F11x),
    info(RETURN_WIDE, "return-wide", Format::F11x),
    info(RETURN_OBJECT, "return-object", Format::F11x),
    info(CONST_4, "const/4", Format::F11n),
    info(CONST_16, "const/16", Format::F21s),
    info(CONST, "const", Format::F31i),
    info(CONST_HIGH16, "const/high16", Format::F21h),
    info(CONST_WIDE_16, "const-wide/16", Format::F21s),
    info(CONST_WIDE_32, "const-wide/32", Format::F31i),
    info(CONST_WIDE, "const-wide", Format::F51l),
    info(CONST_WIDE_HIGH16, "const-wide/high16", Format::F21h),
    info(CONST_STRING, "const-string", Format::F21c),
    info(CONST_STRING_JUMBO, "const-string/jumbo", Format::F31c),
    info(CONST_CLASS, "const-class", Format::F21c),
    info(MONITOR_ENTER, "monitor-enter", Format::F11x),
    info(MONITOR_EXIT, "monitor-exit", Format::F11x),
    info(CHECK_CAST, "check-cast", Format::F21c),
    info(INSTANCE_OF, "instance-of", Format::F22c),
    info(ARRAY_LENGTH, "array-length", Format::F12x),
    info(NEW_INSTANCE, "new-instance", Format::F21c),
    info(NEW_ARRAY, "new-array", Format::F22c),
    info(FILLED_NEW_ARRAY, "filled-new-array", Format::F35c),
    info(FILLED_NEW_ARRAY_RANGE, "filled-new-array/range", Format::F3rc),
    info(FILL_ARRAY_DATA, "fill-array-data", Format::F31t),
    info(THROW, "throw", Format::F11x),
    info(GOTO, "goto", Format::F10t),
    info(GOTO_16, "goto/16", Format::F20t),
    info(GOTO_32, "goto/32", Format::F30t),
    info(PACKED_SWITCH, "packed-switch", Format::F31t),
    info(SPARSE_SWITCH, "sparse-switch", Format::F31t),
    info(CMPL_FLOAT, "cmpl-float", Format::F23x),
    info(CMPG_FLOAT, "cmpg-float", Format::F23x),
    info(CMPL_DOUBLE, "cmpl-double", Format::F23x),
    info(CMPG_DOUBLE, "cmpg-double", Format::F23x),
    info(CMP_LONG, "cmp-long", Format::F23x),
    info(IF_EQ, "if-eq", Format::F22t),
    info(IF_NE, "if-ne", Format::F22t),
    info(IF_LT, "if-lt", Format::F22t),
    info(IF_GE, "if-ge", Format::F22t),
    info(IF_GT, "if-gt", Format::F22t),
    info(IF_LE, "if-le", Format::F22t),
    info(IF_EQZ, "if-eqz", Format::F21t),
    info(IF_NEZ, "if-nez", Format::F21t),
    info(IF_LTZ, "if-ltz", Format::F21t),
    info(IF_GEZ, "if-gez", Format::F21t),
    info(IF_GTZ, "if-gtz", Format::F21t),
    info(IF_LEZ, "if-lez", Format::F21t),
    info(AGET, "aget", Format::F23x),
    info(AGET_WIDE, "aget-wide", Format::F23x),
    info(AGET_OBJECT, "aget-object", Format::F23x),
    info(AGET_BOOLEAN, "aget-boolean", Format::F23x),
    info(AGET_BYTE, "aget-byte", Format::F23x),
    info(AGET_CHAR, "aget-char", Format::F23x),
    info(AGET_SHORT, "aget-short", Format::F23x),
    info(APUT, "aput", Format::F23x),
    info(APUT_WIDE, "aput-wide", Format::F23x),
    info(APUT_OBJECT, "aput-object", Format::F23x),
    info(APUT_BOOLEAN, "aput-boolean", Format::F23x),
    info(APUT_BYTE, "aput-byte", Format::F23x),
    info(APUT_CHAR, "aput-char", Format::F23x),
    info(APUT_SHORT, "aput-short", Format::F23x),
    info(IGET, "iget", Format::F22c),
    info(IGET_WIDE, "iget-wide", Format::F22c),
    info(IGET_OBJECT, "iget-object", Format::F22c),
    info(IGET_BOOLEAN, "iget-boolean", Format::F22c),
    info(IGET_BYTE, "iget-byte", Format::F22c),
    info(IGET_CHAR, "iget-char", Format::F22c),
    info(IGET_SHORT, "iget-short", Format::F22c),
    info(IPUT, "iput", Format::F22c),
    info(IPUT_WIDE, "iput-wide", Format::F22c),
    info(IPUT_OBJECT, "iput-object", Format::F22c),
    info(IPUT_BOOLEAN, "iput-boolean", Format::F22c),
    info(IPUT_BYTE, "iput-byte", Format::F22c),
    info(IPUT_CHAR, "iput-char", Format::F22c),
    info(IPUT_SHORT, "iput-short", Format::F22c),
    info(SGET, "sget", Format::F21c),
    info(SGET_WIDE, "sget-wide", Format::F21c),
    info(SGET_OBJECT, "sget-object", Format::F21c),
    info(SGET_BOOLEAN, "sget-boolean", Format::F21c),
    info(SGET_BYTE, "sget-byte", Format::F21c),
    info(SGET_CHAR, "sget-char", Format::F21c),
    info(SGET_SHORT, "sget-short", Format::F21c),
    info(SPUT, "sput", Format::F21c),
    info(SPUT_WIDE, "sput-wide", Format::F21c),
    info(SPUT_OBJECT, "sput-object", Format::F21c),
    info(SPUT_BOOLEAN, "sput-boolean", Format::F21c),
    info(SPUT_BYTE, "sput-byte", Format::F21c),
    info(SPUT_CHAR, "sput-char", Format::F21c),
    info(SPUT_SHORT, "sput-short", Format::F21c),
    info(INVOKE_VIRTUAL, "invoke-virtual", Format::F35c),
    info(INVOKE_SUPER, "invoke-super", Format::F35c),
    info(INVOKE_DIRECT, "invoke-direct", Format::F35c),
    info(INVOKE_STATIC, "invoke-static", Format::F35c),
    info(INVOKE_INTERFACE, "invoke-interface", Format::F35c),
    info(INVOKE_VIRTUAL_RANGE, "invoke-virtual/range", Format::F3rc),
    info(INVOKE_SUPER_RANGE, "invoke-super/range", Format::F3rc),
    info(INVOKE_DIRECT_RANGE, "invoke-direct/range", Format::F3rc),
    info(INVOKE_STATIC_RANGE, "invoke-static/range", Format::F3rc),
    info(INVOKE_INTERFACE_RANGE, "invoke-interface/range", Format::F3rc),
    info(NEG_INT, "neg-int", Format::F12x),
    info(NOT_INT, "not-int", Format::F12x),
    info(NEG_LONG, "neg-long", Format::F12x),
    info(NOT_LONG, "not-long", Format::F12x),
    info(NEG_FLOAT, "neg-float", Format::F12x),
    info(NEG_DOUBLE, "neg-double", Format::F12x),
    info(INT_TO_LONG, "int-to-long", Format::F12x),
    info(INT_TO_FLOAT, "int-to-float", Format::F12x),
    info(INT_TO_DOUBLE, "int-to-double", Format::F12x),
    info(LONG_TO_INT, "long-to-int", Format::F12x),
    info(LONG_TO_FLOAT, "long-to-float", Format::F12x),
    info(LONG_TO_DOUBLE, "long-to-double", Format::F12x),
    info(FLOAT_TO_INT, "float-to-int", Format::F12x),
    info(FLOAT_TO_LONG, "float-to-long", Format::F12x),
    info(FLOAT_TO_DOUBLE, "float-to-double", Format::F12x),
    info(DOUBLE_TO_INT, "double-to-int", Format::F12x),
    info(DOUBLE_TO_LONG, "double-to-long", Format::F12x),
    info(DOUBLE_TO_FLOAT, "double-to-float", Format::F12x),
    info(INT_TO_BYTE, "int-to-byte", Format::F12x),
    info(INT_TO_CHAR, "int-to-char", Format::F12x),
    info(INT_TO_SHORT, "int-to-short", Format::F12x),
    info(ADD_INT, "add-int", Format::F23x),
    info(SUB_INT, "sub-int", Format::F23x),
    info(MUL_INT, "mul-int", Format::F23x),
    info(DIV_INT, "div-int", Format::F23x),
    info(REM_INT, "rem-int", Format::F23x),
    info(AND_INT, "and-int", Format::F23x),
    info(OR_INT, "or-int", Format::F23x),
    info(XOR_INT, "xor-int", Format::F23x),
    info(SHL_INT, "shl-int", Format::F23x),
    info(SHR_INT, "shr-int", Format::F23x),
    info(USHR_INT, "ushr-int", Format::F23x),
    info(ADD_LONG, "add-long", Format::F23x),
    info(SUB_LONG, "sub-long", Format::F23x),
    info(MUL_LONG, "mul-long", Format::F23x),
    info(DIV_LONG, "div-long", Format::F23x),
    info(REM_LONG, "rem-long", Format::F23x),
    info(AND_LONG, "and-long", Format::F23x),
    info(OR_LONG, "or-long", Format::F23x),
    info(XOR_LONG, "xor-long", Format::F23x),
    info(SHL_LONG, "shl-long", Format::F23x),
    info(SHR_LONG, "shr-long", Format::F23x),
    info(USHR_LONG, "ushr-long", Format::F23x),
    info(ADD_FLOAT, "add-float", Format::F23x),
    info(SUB_FLOAT, "sub-float", Format::F23x),
    info(MUL_FLOAT, "mul-float", Format::F23x),
    info(DIV_FLOAT, "div-float", Format::F23x),
    info(REM_FLOAT, "rem-float", Format::F23x),
    info(ADD_DOUBLE, "add-double", Format::F23x),
    info(SUB_DOUBLE, "sub-double", Format::F23x),
    info(MUL_DOUBLE, "mul-double", Format::F23x),
    info(DIV_DOUBLE, "div-double", Format::F23x),
    info(REM_DOUBLE, "rem-double", Format::F23x),
    info(ADD_INT_2ADDR, "add-int/2addr", Format::F12x),
    info(SUB_INT_2ADDR, "sub-int/2addr", Format::F12x),
    info(MUL_INT_2ADDR, "mul-int/2addr", Format::F12x),
    info(DIV_INT_2ADDR, "div-int/2addr", Format::F12x),
    info(REM_INT_2ADDR, "rem-int/2addr", Format::F12x),
    info(AND_INT_2ADDR, "and-int/2addr", Format::F12x),
    info(OR_INT_2ADDR, "or-int/2addr", Format::F12x),
    info(XOR_INT_2ADDR, "xor-int/2addr", Format::F12x),
    info(SHL_INT_2ADDR, "shl-int/2addr", Format::F12x),
    info(SHR_INT_2ADDR, "shr-int/2addr", Format::F12x),
    info(USHR_INT_2ADDR, "ushr-int/2addr", Format::F12x),
    info(ADD_LONG_2ADDR, "add-long/2addr", Format::F12x),
    info(SUB_LONG_2ADDR, "sub-long/2addr", Format::F12x),
    info(MUL_LONG_2ADDR, "mul-long/2addr", Format::F12x),
    info(DIV_LONG_2ADDR, "div-long/2addr", Format::F12x),
    info(REM_LONG_2ADDR, "rem-long/2addr", Format::F12x),
    info(AND_LONG_2ADDR, "and-long/2addr", Format::F12x),
    info(OR_LONG_2ADDR, "or-long/2addr", Format::F12x),
    info(XOR_LONG_2ADDR, "xor-long/2addr", Format::F12x),
    info(SHL_LONG_2ADDR, "shl-long/2addr", Format::F12x),
    info(SHR_LONG_2ADDR, "shr-long/2addr", Format::F12x),
    info(USHR_LONG_2ADDR, "ushr-long/2addr", Format::F12x),
    info(ADD_FLOAT_2ADDR, "add-float/2addr", Format::F12x),
    info(SUB_FLOAT_2ADDR, "sub-float/2addr", Format::F12x),
    info(MUL_FLOAT_2ADDR, "mul-float/2addr", Format::F12x),
    info(DIV_FLOAT_2ADDR, "div-float/2addr", Format::F12x),
    info(REM_FLOAT_2ADDR, "rem-float/2addr", Format::F12x),
    info(ADD_DOUBLE_2ADDR, "add-double/2addr", Format::F12x),
    info(SUB_DOUBLE_2ADDR, "sub-double/2addr", Format::F12x),
    info(MUL_DOUBLE_2ADDR, "mul-double/2addr", Format::F12x),
    info(DIV_DOUBLE_2ADDR, "div-double/2addr", Format::F12x),
    info(REM_DOUBLE_2ADDR, "rem-double/2addr", Format::F12x),
    info(ADD_INT_LIT16, "add-int/lit16", Format::F22s),
    info(RSUB_INT, "rsub-int", Format::F22s),
    info(MUL_INT_LIT16, "mul-int/lit16", Format::F22s),
    info(DIV_INT_LIT16, "div-int/lit16", Format::F22s),
    info(REM_INT_LIT16, "rem-int/lit16", Format::F22s),
    info(AND_INT_LIT16, "and-int/lit16", Format::F22s),
    info(OR_INT_LIT16, "or-int/lit16", Format::F22s),
    info(XOR_INT_LIT16, "xor-int/lit16", Format::F22s),
    info(ADD_INT_LIT8, "add-int/lit8", Format::F22b),
    info(RSUB_INT_LIT8, "rsub-int/lit8", Format::F22b),
    info(MUL_INT_LIT8, "mul-int/lit8", Format::F22b),
    info(DIV_INT_LIT8, "div-int/lit8", Format::F22b),
    info(REM_INT_LIT8, "rem-int/lit8", Format::F22b),
    info(AND_INT_LIT8, "and-int/lit8", Format::F22b),
    info(OR_INT_LIT8, "or-int/lit8", Format::F22b),
    info(XOR_INT_LIT8, "xor-int/lit8", Format::F22b),
    info(SHL_INT_LIT8, "shl-int/lit8", Format::F22b),
    info(SHR_INT_LIT8, "shr-int/lit8", Format::F22b),
    info(USHR_INT_LIT8, "ushr-int/lit8", Format::F22b),
];

static OPCODES: [OpcodeInfo; 218] = OPCODE_LIST;

const NO_ENTRY: u8 = u8::MAX;

/// Maps an opcode byte to its index in [`OPCODES`].
static INDEX: [u8; 256] = build_index();

const fn build_index() -> [u8; 256] {
    let mut index = [NO_ENTRY; 256];
    let mut i = 0;
    while i < OPCODE_LIST.len() {
        index[OPCODE_LIST[i].opcode as usize] = i as u8;
        i += 1;
    }
    index
}

/// Extract the opcode from the first code unit of an instruction.
#[inline]
pub const fn opcode_of(unit: u16) -> u8 {
    (unit & 0xff) as u8
}

/// Look up the metadata for an opcode byte. Returns `None` for unused values.
pub fn lookup(opcode: u8) -> Option<&'static OpcodeInfo> {
    match INDEX[opcode as usize] {
        NO_ENTRY => None,
        i => Some(&OPCODES[i as usize]),
    }
}

/// All defined opcodes, in ascending opcode order.
pub fn opcode_table() -> &'static [OpcodeInfo] {
    &OPCODES
}

/// Number of defined opcodes.
pub fn opcode_count() -> usize {
    OPCODES.len()
}
