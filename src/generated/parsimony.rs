// This file is generated by rust-protobuf 3.7.2. Do not edit
// .proto file is parsed by pure
// @generated

// https://github.com/rust-lang/rust-clippy/issues/702
#![allow(unknown_lints)]
#![allow(clippy::all)]

#![allow(unused_attributes)]
#![cfg_attr(rustfmt, rustfmt::skip)]

#![allow(dead_code)]
#![allow(missing_docs)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]
#![allow(trivial_casts)]
#![allow(unused_results)]
#![allow(unused_mut)]

//! Generated file from `parsimony.proto`

/// Generated files are compatible only with the same version
/// of protobuf runtime.
const _PROTOBUF_VERSION_CHECK: () = ::protobuf::VERSION_3_7_2;

// @@protoc_insertion_point(message:parsimony.Mutation)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Mutation {
    // message fields
    // @@protoc_insertion_point(field:parsimony.Mutation.position)
    pub position: ::std::option::Option<i32>,
    // @@protoc_insertion_point(field:parsimony.Mutation.ref_nuc)
    pub ref_nuc: ::std::option::Option<i32>,
    // @@protoc_insertion_point(field:parsimony.Mutation.par_nuc)
    pub par_nuc: ::std::option::Option<i32>,
    // @@protoc_insertion_point(field:parsimony.Mutation.mut_nuc)
    pub mut_nuc: ::std::vec::Vec<i32>,
    // @@protoc_insertion_point(field:parsimony.Mutation.chromosome)
    pub chromosome: ::std::option::Option<::std::string::String>,
    // special fields
    // @@protoc_insertion_point(special_field:parsimony.Mutation.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Mutation {
    fn default() -> &'a Mutation {
        <Mutation as ::protobuf::Message>::default_instance()
    }
}

impl Mutation {
    pub fn new() -> Mutation {
        ::std::default::Default::default()
    }

    // required int32 position = 1;

    pub fn position(&self) -> i32 {
        self.position.unwrap_or(0)
    }

    pub fn clear_position(&mut self) {
        self.position = ::std::option::Option::None;
    }

    pub fn has_position(&self) -> bool {
        self.position.is_some()
    }

    // Param is passed by value, moved
    pub fn set_position(&mut self, v: i32) {
        self.position = ::std::option::Option::Some(v);
    }

    // optional int32 ref_nuc = 2;

    pub fn ref_nuc(&self) -> i32 {
        self.ref_nuc.unwrap_or(0)
    }

    pub fn clear_ref_nuc(&mut self) {
        self.ref_nuc = ::std::option::Option::None;
    }

    pub fn has_ref_nuc(&self) -> bool {
        self.ref_nuc.is_some()
    }

    // Param is passed by value, moved
    pub fn set_ref_nuc(&mut self, v: i32) {
        self.ref_nuc = ::std::option::Option::Some(v);
    }

    // required int32 par_nuc = 3;

    pub fn par_nuc(&self) -> i32 {
        self.par_nuc.unwrap_or(0)
    }

    pub fn clear_par_nuc(&mut self) {
        self.par_nuc = ::std::option::Option::None;
    }

    pub fn has_par_nuc(&self) -> bool {
        self.par_nuc.is_some()
    }

    // Param is passed by value, moved
    pub fn set_par_nuc(&mut self, v: i32) {
        self.par_nuc = ::std::option::Option::Some(v);
    }

    // optional string chromosome = 5;

    pub fn chromosome(&self) -> &str {
        match self.chromosome.as_ref() {
            Some(v) => v,
            None => "",
        }
    }

    pub fn clear_chromosome(&mut self) {
        self.chromosome = ::std::option::Option::None;
    }

    pub fn has_chromosome(&self) -> bool {
        self.chromosome.is_some()
    }

    // Param is passed by value, moved
    pub fn set_chromosome(&mut self, v: ::std::string::String) {
        self.chromosome = ::std::option::Option::Some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_chromosome(&mut self) -> &mut ::std::string::String {
        if self.chromosome.is_none() {
            self.chromosome = ::std::option::Option::Some(::std::string::String::new());
        }
        self.chromosome.as_mut().unwrap()
    }

    // Take field
    pub fn take_chromosome(&mut self) -> ::std::string::String {
        self.chromosome.take().unwrap_or_else(|| ::std::string::String::new())
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(5);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_option_accessor::<_, _>(
            "position",
            |m: &Mutation| { &m.position },
            |m: &mut Mutation| { &mut m.position },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_option_accessor::<_, _>(
            "ref_nuc",
            |m: &Mutation| { &m.ref_nuc },
            |m: &mut Mutation| { &mut m.ref_nuc },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_option_accessor::<_, _>(
            "par_nuc",
            |m: &Mutation| { &m.par_nuc },
            |m: &mut Mutation| { &mut m.par_nuc },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "mut_nuc",
            |m: &Mutation| { &m.mut_nuc },
            |m: &mut Mutation| { &mut m.mut_nuc },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_option_accessor::<_, _>(
            "chromosome",
            |m: &Mutation| { &m.chromosome },
            |m: &mut Mutation| { &mut m.chromosome },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Mutation>(
            "Mutation",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for Mutation {
    const NAME: &'static str = "Mutation";

    fn is_initialized(&self) -> bool {
        if self.position.is_none() {
            return false;
        }
        if self.par_nuc.is_none() {
            return false;
        }
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                8 => {
                    self.position = ::std::option::Option::Some(is.read_int32()?);
                },
                16 => {
                    self.ref_nuc = ::std::option::Option::Some(is.read_int32()?);
                },
                24 => {
                    self.par_nuc = ::std::option::Option::Some(is.read_int32()?);
                },
                34 => {
                    is.read_repeated_packed_int32_into(&mut self.mut_nuc)?;
                },
                32 => {
                    self.mut_nuc.push(is.read_int32()?);
                },
                42 => {
                    self.chromosome = ::std::option::Option::Some(is.read_string()?);
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if let Some(v) = self.position {
            my_size += ::protobuf::rt::int32_size(1, v);
        }
        if let Some(v) = self.ref_nuc {
            my_size += ::protobuf::rt::int32_size(2, v);
        }
        if let Some(v) = self.par_nuc {
            my_size += ::protobuf::rt::int32_size(3, v);
        }
        for value in &self.mut_nuc {
            my_size += ::protobuf::rt::int32_size(4, *value);
        };
        if let Some(v) = self.chromosome.as_ref() {
            my_size += ::protobuf::rt::string_size(5, &v);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if let Some(v) = self.position {
            os.write_int32(1, v)?;
        }
        if let Some(v) = self.ref_nuc {
            os.write_int32(2, v)?;
        }
        if let Some(v) = self.par_nuc {
            os.write_int32(3, v)?;
        }
        for v in &self.mut_nuc {
            os.write_int32(4, *v)?;
        };
        if let Some(v) = self.chromosome.as_ref() {
            os.write_string(5, v)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> Mutation {
        Mutation::new()
    }

    fn clear(&mut self) {
        self.position = ::std::option::Option::None;
        self.ref_nuc = ::std::option::Option::None;
        self.par_nuc = ::std::option::Option::None;
        self.mut_nuc.clear();
        self.chromosome = ::std::option::Option::None;
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Mutation {
        static instance: Mutation = Mutation {
            position: ::std::option::Option::None,
            ref_nuc: ::std::option::Option::None,
            par_nuc: ::std::option::Option::None,
            mut_nuc: ::std::vec::Vec::new(),
            chromosome: ::std::option::Option::None,
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for Mutation {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("Mutation").unwrap()).clone()
    }
}

impl ::std::fmt::Display for Mutation {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Mutation {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:parsimony.MutationList)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct MutationList {
    // message fields
    // @@protoc_insertion_point(field:parsimony.MutationList.mutation)
    pub mutation: ::std::vec::Vec<Mutation>,
    // special fields
    // @@protoc_insertion_point(special_field:parsimony.MutationList.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a MutationList {
    fn default() -> &'a MutationList {
        <MutationList as ::protobuf::Message>::default_instance()
    }
}

impl MutationList {
    pub fn new() -> MutationList {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(1);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "mutation",
            |m: &MutationList| { &m.mutation },
            |m: &mut MutationList| { &mut m.mutation },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<MutationList>(
            "MutationList",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for MutationList {
    const NAME: &'static str = "MutationList";

    fn is_initialized(&self) -> bool {
        for v in &self.mutation {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.mutation.push(is.read_message()?);
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        for value in &self.mutation {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        for v in &self.mutation {
            ::protobuf::rt::write_message_field_with_cached_size(1, v, os)?;
        };
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> MutationList {
        MutationList::new()
    }

    fn clear(&mut self) {
        self.mutation.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static MutationList {
        static instance: MutationList = MutationList {
            mutation: ::std::vec::Vec::new(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for MutationList {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("MutationList").unwrap()).clone()
    }
}

impl ::std::fmt::Display for MutationList {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for MutationList {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:parsimony.CondensedNode)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct CondensedNode {
    // message fields
    // @@protoc_insertion_point(field:parsimony.CondensedNode.node_name)
    pub node_name: ::std::option::Option<::std::string::String>,
    // @@protoc_insertion_point(field:parsimony.CondensedNode.condensed_leaves)
    pub condensed_leaves: ::std::vec::Vec<::std::string::String>,
    // special fields
    // @@protoc_insertion_point(special_field:parsimony.CondensedNode.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a CondensedNode {
    fn default() -> &'a CondensedNode {
        <CondensedNode as ::protobuf::Message>::default_instance()
    }
}

impl CondensedNode {
    pub fn new() -> CondensedNode {
        ::std::default::Default::default()
    }

    // required string node_name = 1;

    pub fn node_name(&self) -> &str {
        match self.node_name.as_ref() {
            Some(v) => v,
            None => "",
        }
    }

    pub fn clear_node_name(&mut self) {
        self.node_name = ::std::option::Option::None;
    }

    pub fn has_node_name(&self) -> bool {
        self.node_name.is_some()
    }

    // Param is passed by value, moved
    pub fn set_node_name(&mut self, v: ::std::string::String) {
        self.node_name = ::std::option::Option::Some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_node_name(&mut self) -> &mut ::std::string::String {
        if self.node_name.is_none() {
            self.node_name = ::std::option::Option::Some(::std::string::String::new());
        }
        self.node_name.as_mut().unwrap()
    }

    // Take field
    pub fn take_node_name(&mut self) -> ::std::string::String {
        self.node_name.take().unwrap_or_else(|| ::std::string::String::new())
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(2);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_option_accessor::<_, _>(
            "node_name",
            |m: &CondensedNode| { &m.node_name },
            |m: &mut CondensedNode| { &mut m.node_name },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "condensed_leaves",
            |m: &CondensedNode| { &m.condensed_leaves },
            |m: &mut CondensedNode| { &mut m.condensed_leaves },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<CondensedNode>(
            "CondensedNode",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for CondensedNode {
    const NAME: &'static str = "CondensedNode";

    fn is_initialized(&self) -> bool {
        if self.node_name.is_none() {
            return false;
        }
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.node_name = ::std::option::Option::Some(is.read_string()?);
                },
                18 => {
                    self.condensed_leaves.push(is.read_string()?);
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if let Some(v) = self.node_name.as_ref() {
            my_size += ::protobuf::rt::string_size(1, &v);
        }
        for value in &self.condensed_leaves {
            my_size += ::protobuf::rt::string_size(2, &value);
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if let Some(v) = self.node_name.as_ref() {
            os.write_string(1, v)?;
        }
        for v in &self.condensed_leaves {
            os.write_string(2, &v)?;
        };
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> CondensedNode {
        CondensedNode::new()
    }

    fn clear(&mut self) {
        self.node_name = ::std::option::Option::None;
        self.condensed_leaves.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static CondensedNode {
        static instance: CondensedNode = CondensedNode {
            node_name: ::std::option::Option::None,
            condensed_leaves: ::std::vec::Vec::new(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for CondensedNode {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("CondensedNode").unwrap()).clone()
    }
}

impl ::std::fmt::Display for CondensedNode {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for CondensedNode {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:parsimony.NodeMetadata)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct NodeMetadata {
    // message fields
    // @@protoc_insertion_point(field:parsimony.NodeMetadata.clade_annotations)
    pub clade_annotations: ::std::vec::Vec<::std::string::String>,
    // special fields
    // @@protoc_insertion_point(special_field:parsimony.NodeMetadata.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a NodeMetadata {
    fn default() -> &'a NodeMetadata {
        <NodeMetadata as ::protobuf::Message>::default_instance()
    }
}

impl NodeMetadata {
    pub fn new() -> NodeMetadata {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(1);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "clade_annotations",
            |m: &NodeMetadata| { &m.clade_annotations },
            |m: &mut NodeMetadata| { &mut m.clade_annotations },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<NodeMetadata>(
            "NodeMetadata",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for NodeMetadata {
    const NAME: &'static str = "NodeMetadata";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.clade_annotations.push(is.read_string()?);
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        for value in &self.clade_annotations {
            my_size += ::protobuf::rt::string_size(1, &value);
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        for v in &self.clade_annotations {
            os.write_string(1, &v)?;
        };
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> NodeMetadata {
        NodeMetadata::new()
    }

    fn clear(&mut self) {
        self.clade_annotations.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static NodeMetadata {
        static instance: NodeMetadata = NodeMetadata {
            clade_annotations: ::std::vec::Vec::new(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for NodeMetadata {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("NodeMetadata").unwrap()).clone()
    }
}

impl ::std::fmt::Display for NodeMetadata {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for NodeMetadata {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:parsimony.Data)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Data {
    // message fields
    // @@protoc_insertion_point(field:parsimony.Data.newick)
    pub newick: ::std::option::Option<::std::string::String>,
    // @@protoc_insertion_point(field:parsimony.Data.node_mutations)
    pub node_mutations: ::std::vec::Vec<MutationList>,
    // @@protoc_insertion_point(field:parsimony.Data.condensed_nodes)
    pub condensed_nodes: ::std::vec::Vec<CondensedNode>,
    // @@protoc_insertion_point(field:parsimony.Data.metadata)
    pub metadata: ::std::vec::Vec<NodeMetadata>,
    // special fields
    // @@protoc_insertion_point(special_field:parsimony.Data.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Data {
    fn default() -> &'a Data {
        <Data as ::protobuf::Message>::default_instance()
    }
}

impl Data {
    pub fn new() -> Data {
        ::std::default::Default::default()
    }

    // required string newick = 1;

    pub fn newick(&self) -> &str {
        match self.newick.as_ref() {
            Some(v) => v,
            None => "",
        }
    }

    pub fn clear_newick(&mut self) {
        self.newick = ::std::option::Option::None;
    }

    pub fn has_newick(&self) -> bool {
        self.newick.is_some()
    }

    // Param is passed by value, moved
    pub fn set_newick(&mut self, v: ::std::string::String) {
        self.newick = ::std::option::Option::Some(v);
    }

    // Mutable pointer to the field.
    // If field is not initialized, it is initialized with default value first.
    pub fn mut_newick(&mut self) -> &mut ::std::string::String {
        if self.newick.is_none() {
            self.newick = ::std::option::Option::Some(::std::string::String::new());
        }
        self.newick.as_mut().unwrap()
    }

    // Take field
    pub fn take_newick(&mut self) -> ::std::string::String {
        self.newick.take().unwrap_or_else(|| ::std::string::String::new())
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(4);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_option_accessor::<_, _>(
            "newick",
            |m: &Data| { &m.newick },
            |m: &mut Data| { &mut m.newick },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "node_mutations",
            |m: &Data| { &m.node_mutations },
            |m: &mut Data| { &mut m.node_mutations },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "condensed_nodes",
            |m: &Data| { &m.condensed_nodes },
            |m: &mut Data| { &mut m.condensed_nodes },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "metadata",
            |m: &Data| { &m.metadata },
            |m: &mut Data| { &mut m.metadata },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Data>(
            "Data",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for Data {
    const NAME: &'static str = "Data";

    fn is_initialized(&self) -> bool {
        if self.newick.is_none() {
            return false;
        }
        for v in &self.node_mutations {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.condensed_nodes {
            if !v.is_initialized() {
                return false;
            }
        };
        for v in &self.metadata {
            if !v.is_initialized() {
                return false;
            }
        };
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.newick = ::std::option::Option::Some(is.read_string()?);
                },
                18 => {
                    self.node_mutations.push(is.read_message()?);
                },
                26 => {
                    self.condensed_nodes.push(is.read_message()?);
                },
                34 => {
                    self.metadata.push(is.read_message()?);
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if let Some(v) = self.newick.as_ref() {
            my_size += ::protobuf::rt::string_size(1, &v);
        }
        for value in &self.node_mutations {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        };
        for value in &self.condensed_nodes {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        };
        for value in &self.metadata {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if let Some(v) = self.newick.as_ref() {
            os.write_string(1, v)?;
        }
        for v in &self.node_mutations {
            ::protobuf::rt::write_message_field_with_cached_size(2, v, os)?;
        };
        for v in &self.condensed_nodes {
            ::protobuf::rt::write_message_field_with_cached_size(3, v, os)?;
        };
        for v in &self.metadata {
            ::protobuf::rt::write_message_field_with_cached_size(4, v, os)?;
        };
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> Data {
        Data::new()
    }

    fn clear(&mut self) {
        self.newick = ::std::option::Option::None;
        self.node_mutations.clear();
        self.condensed_nodes.clear();
        self.metadata.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Data {
        static instance: Data = Data {
            newick: ::std::option::Option::None,
            node_mutations: ::std::vec::Vec::new(),
            condensed_nodes: ::std::vec::Vec::new(),
            metadata: ::std::vec::Vec::new(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for Data {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("Data").unwrap()).clone()
    }
}

impl ::std::fmt::Display for Data {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Data {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

static file_descriptor_proto_data: &'static [u8] = b"\
    \n\x0fparsimony.proto\x12\tparsimony\"\x91\x01\n\x08Mutation\x12\x1a\n\
    \x08position\x18\x01\x20\x02(\x05R\x08position\x12\x17\n\x07ref_nuc\x18\
    \x02\x20\x01(\x05R\x06refNuc\x12\x17\n\x07par_nuc\x18\x03\x20\x02(\x05R\
    \x06parNuc\x12\x17\n\x07mut_nuc\x18\x04\x20\x03(\x05R\x06mutNuc\x12\x1e\
    \n\nchromosome\x18\x05\x20\x01(\tR\nchromosome\"?\n\x0cMutationList\x12/\
    \n\x08mutation\x18\x01\x20\x03(\x0b2\x13.parsimony.MutationR\x08mutation\
    \"W\n\rCondensedNode\x12\x1b\n\tnode_name\x18\x01\x20\x02(\tR\x08nodeNam\
    e\x12)\n\x10condensed_leaves\x18\x02\x20\x03(\tR\x0fcondensedLeaves\";\n\
    \x0cNodeMetadata\x12+\n\x11clade_annotations\x18\x01\x20\x03(\tR\x10clad\
    eAnnotations\"\xd6\x01\n\x04Data\x12\x16\n\x06newick\x18\x01\x20\x02(\tR\
    \x06newick\x12>\n\x0enode_mutations\x18\x02\x20\x03(\x0b2\x17.parsimony.\
    MutationListR\rnodeMutations\x12A\n\x0fcondensed_nodes\x18\x03\x20\x03(\
    \x0b2\x18.parsimony.CondensedNodeR\x0econdensedNodes\x123\n\x08metadata\
    \x18\x04\x20\x03(\x0b2\x17.parsimony.NodeMetadataR\x08metadatab\x06proto\
    2\
";

/// `FileDescriptorProto` object which was a source for this generated file
fn file_descriptor_proto() -> &'static ::protobuf::descriptor::FileDescriptorProto {
    static file_descriptor_proto_lazy: ::protobuf::rt::Lazy<::protobuf::descriptor::FileDescriptorProto> = ::protobuf::rt::Lazy::new();
    file_descriptor_proto_lazy.get(|| {
        ::protobuf::Message::parse_from_bytes(file_descriptor_proto_data).unwrap()
    })
}

/// `FileDescriptor` object which allows dynamic access to files
pub fn file_descriptor() -> &'static ::protobuf::reflect::FileDescriptor {
    static generated_file_descriptor_lazy: ::protobuf::rt::Lazy<::protobuf::reflect::GeneratedFileDescriptor> = ::protobuf::rt::Lazy::new();
    static file_descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::FileDescriptor> = ::protobuf::rt::Lazy::new();
    file_descriptor.get(|| {
        let generated_file_descriptor = generated_file_descriptor_lazy.get(|| {
            let mut deps = ::std::vec::Vec::with_capacity(0);
            let mut messages = ::std::vec::Vec::with_capacity(5);
            messages.push(Mutation::generated_message_descriptor_data());
            messages.push(MutationList::generated_message_descriptor_data());
            messages.push(CondensedNode::generated_message_descriptor_data());
            messages.push(NodeMetadata::generated_message_descriptor_data());
            messages.push(Data::generated_message_descriptor_data());
            let mut enums = ::std::vec::Vec::with_capacity(0);
            ::protobuf::reflect::GeneratedFileDescriptor::new_generated(
                file_descriptor_proto(),
                deps,
                messages,
                enums,
            )
        });
        ::protobuf::reflect::FileDescriptor::new_generated_2(generated_file_descriptor)
    })
}
